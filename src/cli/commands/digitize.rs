//! Digitize command implementation
//!
//! This module implements the `digitize` command: the full
//! intake-digitize-verify-submit workflow for a single report file. The
//! verification screen of the host application becomes a console table;
//! corrections are applied through `--set` before submission.

use crate::adapters::notify::LogNotifier;
use crate::config::load_config;
use crate::core::workflow::UploadWorkflow;
use crate::domain::record::DigitizedRecord;
use crate::domain::KrishiError;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;

/// Arguments for the digitize command
#[derive(Args, Debug)]
pub struct DigitizeArgs {
    /// Report file to digitize (.pdf, .jpg, .jpeg or .png)
    #[arg(short, long)]
    pub file: PathBuf,

    /// VLE identifier the report belongs to
    #[arg(short, long)]
    pub vle_id: String,

    /// Correct an extracted field before submission, as FIELD=VALUE.
    /// May be given multiple times.
    #[arg(long, value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Review the extracted values without submitting
    #[arg(long)]
    pub no_submit: bool,

    /// Authentication token of the surrounding session
    #[arg(long, env = "KRISHI_AUTH_TOKEN")]
    pub auth_token: Option<String>,
}

impl DigitizeArgs {
    /// Execute the digitize command
    pub async fn execute(
        &self,
        config_path: &str,
        mut shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        // Authentication is owned by the surrounding application; the
        // workflow only honors the resulting flag.
        let authenticated = !config.workflow.require_auth || self.auth_token.is_some();

        let mut workflow =
            match UploadWorkflow::from_config(&config, Arc::new(LogNotifier::new()), authenticated)
            {
                Ok(w) => w,
                Err(KrishiError::Authentication(msg)) => {
                    eprintln!("❌ {msg}");
                    return Ok(3);
                }
                Err(e) => {
                    eprintln!("❌ {e}");
                    return Ok(2);
                }
            };

        let file_name = self
            .file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        if let Err(e) = workflow.select_file(file_name.as_str(), &self.file) {
            eprintln!("❌ {e}");
            return Ok(1);
        }
        workflow.set_vle_id(&self.vle_id)?;

        println!("🔍 Digitizing {file_name} for VLE {}...", self.vle_id.trim());

        let cancelled = tokio::select! {
            result = workflow.digitize() => {
                if let Err(e) = result {
                    eprintln!("❌ {e}");
                    eprintln!("   The selected file and VLE ID were kept, run the command again to retry.");
                    return Ok(4);
                }
                false
            }
            _ = shutdown_signal.changed() => true,
        };

        if cancelled {
            workflow.abandon();
            println!("⚠️  Digitization cancelled, session discarded.");
            return Ok(130);
        }

        println!();
        println!("Extracted values:");
        print_record(workflow.session().record().expect("record after digitize"));

        if !self.set.is_empty() {
            workflow.begin_edit();
            for assignment in &self.set {
                let Some((key, value)) = assignment.split_once('=') else {
                    workflow.cancel_edit();
                    eprintln!("❌ Invalid --set value {assignment:?}, expected FIELD=VALUE");
                    return Ok(1);
                };
                if let Err(e) = workflow.set_draft_field(key.trim(), value) {
                    workflow.cancel_edit();
                    eprintln!("❌ {e}");
                    return Ok(1);
                }
            }
            workflow.save_edit();

            println!();
            println!("Corrected values:");
            print_record(workflow.session().record().expect("record after save"));
        }

        if self.no_submit {
            println!();
            println!("ℹ️  --no-submit given, record was not submitted.");
            return Ok(0);
        }

        match workflow.submit().await {
            Ok(receipt) => {
                println!();
                println!(
                    "✅ Data for VLE ID {} submitted successfully (receipt {})",
                    receipt.vle_id, receipt.receipt_id
                );
                Ok(0)
            }
            Err(e) => {
                eprintln!("❌ {e}");
                Ok(4)
            }
        }
    }
}

/// Render a record as a two-column console table
fn print_record(record: &DigitizedRecord) {
    let width = record
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);

    for (key, value) in record.iter() {
        println!("  {key:width$}  {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digitize_args_parse_set_assignment() {
        let assignment = "Hours Used=6";
        let (key, value) = assignment.split_once('=').unwrap();
        assert_eq!(key, "Hours Used");
        assert_eq!(value, "6");
    }

    #[test]
    fn test_set_value_may_contain_equals() {
        let assignment = "Remarks=a=b";
        let (key, value) = assignment.split_once('=').unwrap();
        assert_eq!(key, "Remarks");
        assert_eq!(value, "a=b");
    }
}
