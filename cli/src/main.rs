//! Explorer CLI: browse the research dataset from the terminal
//!
//! Uses `RemoteSource` behind a `CachedSource` to talk to a running API.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use research_explorer::graph::{Category, GraphModelBuilder};
use research_explorer::ontology::{audit_dataset, compact, AuditResult, OntologyAudit, Schema, Statement};
use research_explorer::search::search;
use research_explorer::source::{CachedSource, Collection, DataSource, RemoteSource};
use research_explorer::table::{SortDirection, TableView};
use research_explorer::{ExplorerConfig, MapExplorer, NetworkExplorer, TimeWindow};

#[derive(Parser)]
#[command(name = "explorer", version, about = "Research Explorer CLI")]
struct Cli {
    /// Server root URL; overrides the config file
    #[arg(long, global = true, env = "EXPLORER_URL")]
    url: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Entity network with category filters and label search
    Network {
        /// Dataset partition
        #[arg(long)]
        source: Option<String>,

        /// Hide a category (repeatable)
        #[arg(long = "hide", value_name = "CATEGORY")]
        hide: Vec<String>,

        /// Label search over the visible nodes
        #[arg(long)]
        search: Option<String>,
    },
    /// Person-at-place features inside a year window
    Map {
        /// First year of the window
        #[arg(long)]
        from: Option<i32>,

        /// Last year of the window
        #[arg(long)]
        to: Option<i32>,

        /// Dataset partition
        #[arg(long)]
        source: Option<String>,
    },
    /// Ontology classes and properties
    Ontology,
    /// Declared versus observed vocabulary
    Audit {
        /// Audit a local JSON file `{ "schema": ..., "statements": [...] }`
        #[arg(long, value_name = "FILE")]
        local: Option<PathBuf>,
    },
    /// List a collection
    List {
        /// persons, works, places, subjects, languages or scholarly
        collection: String,

        /// Dataset partition
        #[arg(long)]
        source: Option<String>,

        /// Case-insensitive text filter over all columns
        #[arg(long)]
        filter: Option<String>,

        /// Column to sort by
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show one entity
    Show {
        collection: String,
        id: String,
    },
    /// Global counters
    Stats {
        /// Dataset partition
        #[arg(long)]
        source: Option<String>,
    },
}

#[derive(Deserialize)]
struct LocalOntology {
    schema: Schema,
    #[serde(default)]
    statements: Vec<Statement>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => ExplorerConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ExplorerConfig::default(),
    };
    if let Some(url) = &cli.url {
        config = config.with_server(url);
    }

    let source = CachedSource::new(RemoteSource::from_config(&config)?, config.cache_capacity);
    let format = cli.format;

    match cli.command {
        Commands::Network { source: partition, hide, search } => {
            run_network(&source, partition.as_deref(), &hide, search.as_deref(), format).await
        }
        Commands::Map { from, to, source: partition } => {
            let window = TimeWindow::new(
                from.unwrap_or(config.default_window.min()),
                to.unwrap_or(config.default_window.max()),
            )?;
            run_map(&source, partition.as_deref(), window, format).await
        }
        Commands::Ontology => run_ontology(&source, format).await,
        Commands::Audit { local } => run_audit(&source, local, format).await,
        Commands::List { collection, source: partition, filter, sort, desc, page } => {
            let collection: Collection = collection.parse()?;
            let options = ListOptions { filter, sort, desc, page };
            run_list(&source, collection, partition.as_deref(), options, format).await
        }
        Commands::Show { collection, id } => {
            run_show(&source, collection.parse()?, &id).await
        }
        Commands::Stats { source: partition } => run_stats(&source, partition.as_deref(), format).await,
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

async fn run_network(
    source: &impl DataSource,
    partition: Option<&str>,
    hide: &[String],
    query: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let payload = source.network(partition).await?;
    let mut explorer = NetworkExplorer::from_payload(&payload);
    for name in hide {
        let category = Category::parse(name);
        if category == Category::Unknown && !name.eq_ignore_ascii_case("unknown") {
            bail!("unknown category: {}", name);
        }
        explorer.set_visible(category, false);
    }
    if let Some(query) = query {
        explorer.set_query(query);
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&explorer.visible().to_payload())?);
        }
        OutputFormat::Table => {
            let report = explorer.report().clone();
            let statistics = explorer.graph().statistics();
            let (nodes, edges) = {
                let visible = explorer.visible();
                (visible.node_count(), visible.edge_count())
            };

            let mut table = new_table(vec!["Label", "Category", "Id"]);
            for node in explorer.index() {
                table.add_row(vec![
                    node.label.clone(),
                    node.category.display_name().to_string(),
                    node.id.to_string(),
                ]);
            }
            println!("{}", table);

            let mut legend = new_table(vec!["Category", "Color", "Nodes", "Shown"]);
            for (category, count) in &statistics.nodes_per_category {
                let shown = if explorer.toggles().is_visible(*category) { "yes" } else { "no" };
                legend.add_row(vec![
                    category.display_name().to_string(),
                    category.color().to_string(),
                    count.to_string(),
                    shown.to_string(),
                ]);
            }
            println!("{}", legend);
            println!(
                "{} of {} node(s), {} of {} edge(s) visible",
                nodes, statistics.node_count, edges, statistics.edge_count
            );
            if report.dropped() > 0 {
                println!("{} malformed record(s) dropped", report.dropped());
            }
        }
    }
    Ok(())
}

async fn run_map(
    source: &impl DataSource,
    partition: Option<&str>,
    window: TimeWindow,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let explorer = MapExplorer::new(source.geojson(partition).await?, window);
    let features = explorer.visible_features();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&features)?);
        }
        OutputFormat::Table => {
            let mut table = new_table(vec!["Person", "Place", "Start", "End", "Lat", "Lon"]);
            for feature in &features {
                let p = &feature.properties;
                table.add_row(vec![
                    p.person_label.clone(),
                    p.place_label.clone(),
                    p.start.map(|y| y.to_string()).unwrap_or_default(),
                    p.end.map(|y| y.to_string()).unwrap_or_default(),
                    format!("{:.4}", feature.lat()),
                    format!("{:.4}", feature.lon()),
                ]);
            }
            println!("{}", table);
            println!(
                "{} feature(s) in {} ({} undated hidden)",
                features.len(),
                window,
                explorer.undated_count()
            );
        }
    }
    Ok(())
}

async fn run_ontology(source: &impl DataSource, format: OutputFormat) -> anyhow::Result<()> {
    let payload = source.ontology_graph().await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&payload)?),
        OutputFormat::Table => {
            let (graph, _) = GraphModelBuilder::build(&payload);
            let mut table = new_table(vec!["Class", "Property", "Range"]);
            for class in search(graph.nodes(), "") {
                let outgoing = graph.get_outgoing_edges(class.id.as_str());
                if outgoing.is_empty() {
                    table.add_row(vec![class.label.clone(), String::new(), String::new()]);
                }
                for edge in outgoing {
                    let range = graph
                        .get_node(edge.target.as_str())
                        .map(|n| n.label.clone())
                        .unwrap_or_default();
                    table.add_row(vec![class.label.clone(), edge.label.clone().unwrap_or_default(), range]);
                }
            }
            println!("{}", table);
            println!("{} class(es), {} propert(ies)", graph.node_count(), graph.edge_count());
        }
    }
    Ok(())
}

async fn run_audit(
    source: &impl DataSource,
    local: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let audit: OntologyAudit = match local {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let local: LocalOntology = serde_json::from_str(&text)?;
            audit_dataset(&local.schema, &local.statements)
        }
        None => source.ontology_audit().await?,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&audit)?),
        OutputFormat::Table => {
            let mut summary = new_table(vec!["Kind", "Defined", "Used", "Unused", "Undefined"]);
            for (kind, result) in [("Classes", &audit.classes), ("Properties", &audit.properties)] {
                summary.add_row(vec![
                    kind.to_string(),
                    result.defined_count.to_string(),
                    result.actual_count.to_string(),
                    result.unused.len().to_string(),
                    result.undefined.len().to_string(),
                ]);
            }
            println!("{}", summary);
            print_terms("Unused classes", &audit.classes, |r| &r.unused);
            print_terms("Undefined classes", &audit.classes, |r| &r.undefined);
            print_terms("Unused properties", &audit.properties, |r| &r.unused);
            print_terms("Undefined properties", &audit.properties, |r| &r.undefined);
        }
    }
    Ok(())
}

fn print_terms(
    title: &str,
    result: &AuditResult,
    pick: impl Fn(&AuditResult) -> &std::collections::BTreeSet<String>,
) {
    let terms = pick(result);
    if terms.is_empty() {
        return;
    }
    println!("\n{} ({}):", title, terms.len());
    for uri in terms {
        println!("  {}", compact(uri));
    }
}

struct ListOptions {
    filter: Option<String>,
    sort: Option<String>,
    desc: bool,
    page: usize,
}

async fn run_list(
    source: &impl DataSource,
    collection: Collection,
    partition: Option<&str>,
    options: ListOptions,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut view = TableView::for_records(source.list(collection, partition).await?);
    if let Some(filter) = options.filter {
        view.set_filter(filter);
    }
    if let Some(column) = &options.sort {
        let direction = if options.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        if !view.sort_by(column, direction) {
            bail!("cannot sort by '{}'; columns: {}", column, view.headers().join(", "));
        }
    }

    let page_index = options.page.max(1) - 1;
    let rows = view.page(page_index);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => {
            let mut table = new_table(view.headers());
            for row in &rows {
                table.add_row(view.render_row(row));
            }
            println!("{}", table);
            println!(
                "page {} of {} ({} {})",
                page_index + 1,
                view.page_count(),
                view.len(),
                collection
            );
        }
    }
    Ok(())
}

async fn run_show(source: &impl DataSource, collection: Collection, id: &str) -> anyhow::Result<()> {
    match source.detail(collection, id).await? {
        Some(detail) => println!("{}", serde_json::to_string_pretty(&detail)?),
        None => println!("{} '{}' not found", collection, id),
    }
    Ok(())
}

async fn run_stats(
    source: &impl DataSource,
    partition: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let stats = source.stats(partition).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Table => {
            let mut table = new_table(vec!["Collection", "Count"]);
            for (name, count) in &stats {
                table.add_row(vec![name.clone(), count.to_string()]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}
