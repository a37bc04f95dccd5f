use clap::{Args, Subcommand};

/// Root subcommands for the `evx` binary.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Wipe the configured database and insert the sample document graph
    Seed,
    /// Find articles by a field match and resolve their links
    Query(QueryArgs),
    /// Run the full demonstration: seed, then query
    Run(RunArgs),
    /// Print the JSON Schema of one or all entity types
    Schema(SchemaArgs),
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Article field to match on (pmc_id or title)
    #[arg(long, default_value = "pmc_id")]
    pub field: String,

    /// Value the field must equal
    pub value: String,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Run only the seeding half
    #[arg(long, conflicts_with = "query_only")]
    pub seed_only: bool,

    /// Run only the query half
    #[arg(long)]
    pub query_only: bool,

    /// Article field to match on (pmc_id or title)
    #[arg(long, default_value = "pmc_id")]
    pub field: String,

    /// Value to query for after seeding
    #[arg(default_value = "PMC10300813")]
    pub value: String,
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Entity type (article, author, tag, systematic_review, clinical_trial);
    /// omit for all
    pub entity: Option<String>,
}
