//! Moderation subcommands: reports and sanctions.

use std::io::{self, Write};
use std::sync::Arc;

use dusksky_client::ApiClient;
use dusksky_client::services::ModerationService;
use dusksky_client::services::moderation::{
    NewReport, NewSanction, ReportContentType, SanctionType,
};

use crate::fmt::{write_report_detail, write_sanction_line};

/// Moderation subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum ModerationAction {
    /// List all reports.
    Reports,
    /// Show one report.
    Report {
        /// Report ID.
        id: String,
    },
    /// File a report against a user.
    FileReport {
        /// Reported user ID.
        reported_user_id: String,
        /// Content kind: comment, review, profile.
        content_type: String,
        /// Reason for the report.
        reason: String,
    },
    /// Mark a report resolved.
    Resolve {
        /// Report ID.
        id: String,
    },
    /// Delete a report.
    DeleteReport {
        /// Report ID.
        id: String,
    },
    /// List all sanctions.
    Sanctions,
    /// Apply a sanction. Suspensions need an end date; bans are indefinite.
    Sanction {
        /// Sanctioned user ID.
        user_id: String,
        /// Sanction kind: ban, suspension.
        #[arg(value_name = "TYPE")]
        sanction_type: String,
        /// End of a suspension (RFC 3339).
        #[arg(long)]
        end_date: Option<String>,
        /// Reason shown to the user.
        #[arg(long)]
        reason: Option<String>,
    },
    /// Lift a sanction.
    DeleteSanction {
        /// Sanction ID.
        id: String,
    },
}

fn parse_content_type(content_type: &str) -> anyhow::Result<ReportContentType> {
    match content_type {
        "comment" => Ok(ReportContentType::Comment),
        "review" => Ok(ReportContentType::Review),
        "profile" => Ok(ReportContentType::Profile),
        other => anyhow::bail!("unknown content type '{other}' (comment, review, profile)"),
    }
}

fn parse_sanction_type(sanction_type: &str) -> anyhow::Result<SanctionType> {
    match sanction_type {
        "ban" => Ok(SanctionType::Ban),
        "suspension" => Ok(SanctionType::Suspension),
        other => anyhow::bail!("unknown sanction type '{other}' (ban, suspension)"),
    }
}

/// Execute a moderation subcommand.
pub async fn run(action: ModerationAction, api: &Arc<ApiClient>) -> anyhow::Result<()> {
    let moderation = ModerationService::new(Arc::clone(api));
    let mut out = io::stdout();

    match action {
        ModerationAction::Reports => {
            for report in moderation.reports().await? {
                writeln!(
                    out,
                    "  {}  target:{}  {:?}  {:?}",
                    report.id, report.reported_user_id, report.content_type, report.status
                )?;
            }
        }
        ModerationAction::Report { id } => {
            let report = moderation.report(&id).await?;
            write_report_detail(&mut out, &report)?;
        }
        ModerationAction::FileReport { reported_user_id, content_type, reason } => {
            let content_type = parse_content_type(&content_type)?;
            let report = moderation
                .create_report(&NewReport { reported_user_id, content_type, reason })
                .await?;
            writeln!(out, "Report {} filed", report.id)?;
        }
        ModerationAction::Resolve { id } => {
            moderation.resolve_report(&id).await?;
            writeln!(out, "Report {id} resolved")?;
        }
        ModerationAction::DeleteReport { id } => {
            moderation.delete_report(&id).await?;
            writeln!(out, "Deleted report {id}")?;
        }
        ModerationAction::Sanctions => {
            for sanction in moderation.sanctions().await? {
                write_sanction_line(&mut out, &sanction)?;
            }
        }
        ModerationAction::Sanction { user_id, sanction_type, end_date, reason } => {
            let sanction_type = parse_sanction_type(&sanction_type)?;
            if sanction_type == SanctionType::Suspension && end_date.is_none() {
                anyhow::bail!("a suspension needs --end-date");
            }
            let sanction = moderation
                .apply_sanction(&NewSanction {
                    user_id,
                    sanction_type,
                    start_date: chrono::Utc::now().to_rfc3339(),
                    end_date: if sanction_type == SanctionType::Suspension {
                        end_date
                    } else {
                        None
                    },
                    reason,
                })
                .await?;
            writeln!(out, "Sanction {} applied", sanction.id)?;
        }
        ModerationAction::DeleteSanction { id } => {
            moderation.delete_sanction(&id).await?;
            writeln!(out, "Deleted sanction {id}")?;
        }
    }
    Ok(())
}
