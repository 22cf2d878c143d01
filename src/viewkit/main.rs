use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use viewkit::attributes::AttributeMap;
use viewkit::config::ViewConfig;
use viewkit::error::Result;
use viewkit::helpers::ViewHelpers;
use viewkit::partial::{Partial, Variables};
use viewkit::serializer::IdPrefix;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let helpers = init_helpers(&cli)?;

    match cli.command {
        Commands::Attrs { json } => handle_attrs(&helpers, &json),
        Commands::Open { element, attrs } => handle_open(&helpers, &element, attrs.as_deref()),
        Commands::Close { element } => handle_close(&helpers, &element),
        Commands::Element {
            element,
            attrs,
            content,
            id_prefix,
        } => handle_element(
            &helpers,
            &element,
            attrs.as_deref(),
            &content,
            id_prefix.as_deref(),
        ),
        Commands::Partial { names, params } => handle_partial(&helpers, names, params.as_deref()),
    }
}

/// Logs go to stderr so they never mix with rendered markup. RUST_LOG wins over --verbose.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_helpers(cli: &Cli) -> Result<ViewHelpers> {
    let config_dir = cli
        .config
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut config = ViewConfig::load(&config_dir)?;
    if let Some(templates) = &cli.templates {
        config.templates_dir = templates.clone();
    }

    Ok(ViewHelpers::from_config(&config))
}

fn handle_attrs(helpers: &ViewHelpers, json: &str) -> Result<()> {
    let attribs = AttributeMap::from_json(json)?;
    println!("{}", helpers.serializer().serialize(&attribs));
    Ok(())
}

fn handle_open(helpers: &ViewHelpers, element: &str, attrs: Option<&str>) -> Result<()> {
    let attribs = parse_attrs(attrs)?;
    println!("{}", helpers.element().open_tag(element, &attribs));
    Ok(())
}

fn handle_close(helpers: &ViewHelpers, element: &str) -> Result<()> {
    println!("{}", helpers.element().close_tag(element));
    Ok(())
}

fn handle_element(
    helpers: &ViewHelpers,
    element: &str,
    attrs: Option<&str>,
    content: &str,
    id_prefix: Option<&str>,
) -> Result<()> {
    let attribs = parse_attrs(attrs)?;
    let html = match id_prefix {
        Some(prefix) => helpers.element().to_html_with_prefix(
            element,
            &attribs,
            content,
            &IdPrefix::from_type_name(prefix),
        ),
        None => helpers.element().to_html(element, &attribs, content),
    };
    println!("{}", html);
    Ok(())
}

fn handle_partial(helpers: &ViewHelpers, names: Vec<String>, params: Option<&str>) -> Result<()> {
    let partial = match names.len() {
        0 => None,
        1 => names.into_iter().next().map(Partial::Name),
        _ => Some(Partial::Sequence(names)),
    };
    let params: Variables = match params {
        Some(json) => serde_json::from_str(json)?,
        None => Variables::new(),
    };

    let output = helpers.render_partial(partial, &params)?;
    print!("{}", output);
    Ok(())
}

fn parse_attrs(attrs: Option<&str>) -> Result<AttributeMap> {
    match attrs {
        Some(json) => Ok(AttributeMap::from_json(json)?),
        None => Ok(AttributeMap::new()),
    }
}
