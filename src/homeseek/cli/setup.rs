use clap::{Args, Parser, Subcommand};
use homeseek::filter::SearchForm;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "homeseek", bin_name = "homeseek", version = get_version())]
#[command(about = "Search property listings and keep a list of favorites", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (JSON) to search
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Directory holding favorites and config
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog
    #[command(alias = "s")]
    Search(SearchArgs),

    /// Show one property in detail
    #[command(alias = "v")]
    View {
        /// Property id
        id: String,
    },

    /// Manage favorites (lists them when no action is given)
    #[command(alias = "f")]
    Fav {
        #[command(subcommand)]
        action: Option<FavCommands>,
    },

    /// List the property types present in the catalog
    Types,

    /// Get or set configuration
    Config {
        /// Configuration key (catalog, favorites-key, list-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavCommands {
    /// List favorites
    #[command(alias = "ls")]
    List,

    /// Add the property if it is not a favorite, remove it if it is
    #[command(alias = "t")]
    Toggle { id: String },

    /// Add a property to favorites
    Add { id: String },

    /// Remove a property from favorites
    #[command(alias = "rm")]
    Remove { id: String },

    /// Remove every favorite
    Clear,
}

/// Search criteria, kept as raw text. Values that do not parse are ignored
/// and reported rather than rejected.
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Property type, e.g. House or Flat ("Any" for all)
    #[arg(long = "type", value_name = "TYPE")]
    pub property_type: Option<String>,

    /// Minimum price
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub min_price: Option<String>,

    /// Maximum price
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub max_price: Option<String>,

    /// Minimum bedrooms
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub min_beds: Option<String>,

    /// Maximum bedrooms
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub max_beds: Option<String>,

    /// Postcode area (case-insensitive substring)
    #[arg(long, value_name = "AREA")]
    pub postcode: Option<String>,

    /// Added on or after this date
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Added on or before this date
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,
}

impl From<SearchArgs> for SearchForm {
    fn from(args: SearchArgs) -> Self {
        SearchForm {
            property_type: args.property_type,
            min_price: args.min_price,
            max_price: args.max_price,
            min_bedrooms: args.min_beds,
            max_bedrooms: args.max_beds,
            postcode_area: args.postcode,
            date_from: args.from,
            date_to: args.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_flags_as_raw_text() {
        let cli = Cli::try_parse_from([
            "homeseek",
            "search",
            "--type",
            "Flat",
            "--min-price",
            "abc",
            "--max-beds",
            "-1",
            "--postcode",
            "sw",
        ])
        .unwrap();

        let Some(Commands::Search(args)) = cli.command else {
            panic!("expected search command");
        };
        let form = SearchForm::from(args);
        assert_eq!(form.property_type.as_deref(), Some("Flat"));
        assert_eq!(form.min_price.as_deref(), Some("abc"));
        assert_eq!(form.max_bedrooms.as_deref(), Some("-1"));
        assert_eq!(form.postcode_area.as_deref(), Some("sw"));
        assert!(form.date_from.is_none());
    }

    #[test]
    fn parses_fav_subcommands_and_globals() {
        let cli =
            Cli::try_parse_from(["homeseek", "fav", "rm", "3", "--data-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(
            cli.command,
            Some(Commands::Fav {
                action: Some(FavCommands::Remove { ref id })
            }) if id == "3"
        ));

        let cli = Cli::try_parse_from(["homeseek", "fav"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Fav { action: None })));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["homeseek", "-v"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }
}
