use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Add one completed work session
    Add {
        /// Employee name
        #[arg(long, short = 'e')]
        employee: String,

        /// Product name
        #[arg(long, short = 'p')]
        product: String,

        /// Start time, "YYYY-MM-DD HH:MM"
        #[arg(long)]
        start: String,

        /// End time, "YYYY-MM-DD HH:MM"
        #[arg(long)]
        end: String,
    },

    /// Browse the record collection
    Record {
        #[command(subcommand)]
        command: RecordCommand,
    },

    /// Per-employee duration statistics over a filtered view
    Stats {
        /// Restrict to one employee ("ALL" for no constraint)
        #[arg(long)]
        employee: Option<String>,

        /// Restrict to one product ("ALL" for no constraint)
        #[arg(long)]
        product: Option<String>,

        /// Append a bar chart of the per-employee standard deviations
        #[arg(long)]
        chart: bool,
    },

    /// List distinct employee names (filter choices)
    Employees,

    /// List distinct product names (filter choices)
    Products,
}

#[derive(Subcommand)]
pub enum RecordCommand {
    /// Show the filtered record view
    List {
        /// Restrict to one employee ("ALL" for no constraint)
        #[arg(long)]
        employee: Option<String>,

        /// Restrict to one product ("ALL" for no constraint)
        #[arg(long)]
        product: Option<String>,
    },

    /// Write the filtered record view to a CSV file
    Export {
        /// Destination file path
        #[arg(long, short = 'o')]
        output: String,

        /// Restrict to one employee ("ALL" for no constraint)
        #[arg(long)]
        employee: Option<String>,

        /// Restrict to one product ("ALL" for no constraint)
        #[arg(long)]
        product: Option<String>,
    },
}
