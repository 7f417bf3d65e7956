//! sdf-nodes CLI
//!
//! Command-line interface for the node runtime and the SDF files it writes.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use sdf_nodes::io::{save_layout_json, to_json_string};
use sdf_nodes::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sdf-nodes")]
#[command(version = sdf_nodes::VERSION)]
#[command(about = "Node-based signed distance field construction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered node classes
    Nodes,

    /// Extrude a circle profile into a solid through the extrude node
    Extrude {
        /// Circle radius
        #[arg(short, long, default_value = "1.0")]
        radius: f32,
        /// Extrusion height
        #[arg(long, default_value = "1.0")]
        height: f32,
        /// Output SDF file (.sdf.json); prints JSON when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also save the node-tree layout (.nodes.json)
        #[arg(long)]
        layout: Option<PathBuf>,
    },

    /// Display SDF file information
    Info {
        /// Input file (.sdf.json)
        file: PathBuf,
    },

    /// Evaluate a saved SDF at a point
    Eval {
        /// Input file (.sdf.json)
        file: PathBuf,
        /// X coordinate
        #[arg(allow_hyphen_values = true)]
        x: f32,
        /// Y coordinate
        #[arg(allow_hyphen_values = true)]
        y: f32,
        /// Z coordinate
        #[arg(allow_hyphen_values = true)]
        z: f32,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sdf_nodes=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Nodes => cmd_nodes(),
        Commands::Extrude {
            radius,
            height,
            output,
            layout,
        } => cmd_extrude(radius, height, output, layout),
        Commands::Info { file } => cmd_info(file),
        Commands::Eval { file, x, y, z } => cmd_eval(file, Vec3::new(x, y, z)),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn cmd_nodes() -> Result<(), Box<dyn Error>> {
    let registry = default_registry()?;
    for class in registry.classes() {
        let kind = if class.is_dummy() { "placeholder" } else { "node" };
        println!("{:<20} {:<16} {}", class.idname, class.label, kind);
    }
    let missing = Dependencies::detect().missing();
    if !missing.is_empty() {
        println!("Missing backends: {}", missing.join(", "));
    }
    Ok(())
}

fn cmd_extrude(
    radius: f32,
    height: f32,
    output: Option<PathBuf>,
    layout: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let registry = default_registry()?;
    let mut tree = NodeTree::new();
    let id = tree.add_node(&registry, SdfExtrudeNode::IDNAME)?;

    let profile: FieldRef = Arc::new(Sdf2dScalarField::new(Sdf2dNode::circle(radius)));
    tree.feed(id, "SDF", Data::List(vec![Data::Field(profile)]))?;
    tree.watch(id, "SDF")?;
    if !tree.set_property(id, "height", height)? {
        tree.update()?;
    }
    if let Some(err) = tree.node_error(id) {
        return Err(err.clone().into());
    }

    let out = tree
        .output(id, "SDF")?
        .ok_or("extrude node produced no output")?;
    let field = out
        .as_list()?
        .first()
        .ok_or("extrude node produced an empty list")?
        .as_field()?;
    let root = field
        .as_sdf()
        .ok_or("extruded field is not backed by an SDF tree")?
        .clone();

    let metadata = SdfMetadata {
        name: Some(format!("circle r={} h={}", radius, height)),
        source_node: Some(SdfExtrudeNode::IDNAME.to_string()),
        custom: None,
    };
    let sdf_tree = SdfTree::with_metadata(root, metadata);

    match output {
        Some(path) => {
            save(&sdf_tree, &path)?;
            info!(nodes = sdf_tree.node_count(), path = %path.display(), "saved extrusion");
        }
        None => println!("{}", to_json_string(&sdf_tree)?),
    }

    if let Some(path) = layout {
        save_layout_json(&tree, &path)?;
        info!(path = %path.display(), "saved node layout");
    }
    Ok(())
}

fn cmd_info(path: PathBuf) -> Result<(), Box<dyn Error>> {
    println!("{}", get_info(&path)?);
    Ok(())
}

fn cmd_eval(path: PathBuf, point: Vec3) -> Result<(), Box<dyn Error>> {
    let tree = load(&path)?;
    let distance = eval(&tree.root, point);
    println!("{}", distance);
    Ok(())
}
