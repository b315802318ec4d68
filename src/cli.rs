use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::employee::EmployeeId;

/// Org chart position editor
#[derive(Parser, Debug)]
#[command(name = "orgchart")]
#[command(about = "Create and edit org-chart positions from the terminal")]
#[command(version)]
pub struct Cli {
    /// JSON file holding the employee list (created on first save)
    #[arg(long, global = true, default_value = "employees.json")]
    pub data: PathBuf,

    /// Write logs to this file. Without it the TUI logs nothing and
    /// headless commands log warnings to stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive position editor (default)
    Tui,
    /// Print all positions
    List {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a new position
    Add {
        /// Position name
        #[arg(short, long, default_value = "")]
        name: String,
        /// Position description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Id of the parent position
        #[arg(short, long)]
        parent: Option<EmployeeId>,
    },
    /// Update an existing position; omitted fields keep their current value
    Update {
        /// Id of the position to update
        #[arg(long)]
        id: EmployeeId,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New parent id
        #[arg(short, long, conflicts_with = "no_parent")]
        parent: Option<EmployeeId>,
        /// Make the position a root
        #[arg(long)]
        no_parent: bool,
    },
    /// Check the data file for dangling parent references and duplicate ids
    Validate,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether this invocation takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Tui))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_is_interactive() {
        let cli = Cli::try_parse_from(["orgchart"]).unwrap();
        assert!(cli.is_interactive());
        assert_eq!(cli.data, PathBuf::from("employees.json"));
    }

    #[test]
    fn test_add_defaults_to_empty_fields() {
        let cli = Cli::try_parse_from(["orgchart", "add", "--parent", "3"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                name: String::new(),
                description: String::new(),
                parent: Some(3),
            })
        );
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_update_parent_conflicts_with_no_parent() {
        let result = Cli::try_parse_from([
            "orgchart",
            "update",
            "--id",
            "5",
            "--parent",
            "1",
            "--no-parent",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_data_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["orgchart", "list", "--data", "/tmp/org.json"]).unwrap();
        assert_eq!(cli.data, PathBuf::from("/tmp/org.json"));
    }
}
