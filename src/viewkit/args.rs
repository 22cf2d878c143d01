use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "viewkit")]
#[command(about = "Render HTML attributes, elements and partial templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing viewkit.json (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory partial templates are loaded from (overrides the config)
    #[arg(short, long, global = true)]
    pub templates: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serialize a JSON object of attributes
    #[command(alias = "a")]
    Attrs {
        /// Attributes as a JSON object (e.g. '{"id": "x", "open": true}')
        json: String,
    },

    /// Print an opening tag
    Open {
        /// Tag name
        element: String,

        /// Attributes as a JSON object
        #[arg(short, long)]
        attrs: Option<String>,
    },

    /// Print a closing tag
    Close {
        /// Tag name
        element: String,
    },

    /// Print a complete element
    #[command(alias = "el")]
    Element {
        /// Tag name
        element: String,

        /// Attributes as a JSON object
        #[arg(short, long)]
        attrs: Option<String>,

        /// Content placed between the tags, as-is
        #[arg(long, default_value = "")]
        content: String,

        /// Type name whose last segment prefixes the id (e.g. App\View\Menu)
        #[arg(long)]
        id_prefix: Option<String>,
    },

    /// Render a partial template
    #[command(alias = "p")]
    Partial {
        /// Template name, or template name and alias
        #[arg(num_args = 0..)]
        names: Vec<String>,

        /// Template variables as a JSON object
        #[arg(long)]
        params: Option<String>,
    },
}
