//! Fields command implementation
//!
//! Lists the canonical report field schema.

use crate::domain::schema::FieldSchema;
use clap::Args;

/// Arguments for the fields command
#[derive(Args, Debug)]
pub struct FieldsArgs {}

impl FieldsArgs {
    /// Execute the fields command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let schema = FieldSchema::vle_report();

        println!("Report fields ({} total):", schema.len());
        for field in schema.fields() {
            let marker = if field.required { "required" } else { "optional" };
            println!("  {:<16} {marker}", field.key);
        }

        Ok(0)
    }
}
