//! Command-line driver for the wombat markup parser.
//!
//! Reads a document from a file or an inline `--html` string, parses it,
//! and prints the tree (default), a JSON dump (`--json`), or the
//! re-serialized markup (`--render`).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use wombat_dom::{Node, serialize};
use wombat_html::parse_with_issues;

/// Parse a markup document and dump the resulting tree.
#[derive(Parser)]
#[command(name = "wombat", version, about)]
struct Cli {
    /// Path to a markup file.
    #[arg(required_unless_present = "html")]
    file: Option<PathBuf>,

    /// Parse this markup string instead of reading a file.
    #[arg(long, value_name = "STRING")]
    html: Option<String>,

    /// Dump the tree as pretty-printed JSON.
    #[arg(long)]
    json: bool,

    /// Serialize the parsed tree back into markup text.
    #[arg(long, conflicts_with = "json")]
    render: bool,

    /// Also report recovered malformed-input issues on stderr.
    #[arg(long)]
    issues: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let document = match (&cli.html, &cli.file) {
        (Some(html), _) => html.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => unreachable!("clap enforces FILE or --html"),
    };

    let (nodes, issues) = parse_with_issues(&document);

    if cli.issues {
        for issue in &issues {
            eprintln!("{} {issue}", "warning:".yellow());
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&nodes)?);
    } else if cli.render {
        println!("{}", serialize(&nodes));
    } else {
        for node in &nodes {
            print_tree(node, 0);
        }
    }

    Ok(())
}

/// Print a node and its descendants, one per line, two-space indented.
/// Whitespace in text nodes is made visible so layout-significant runs
/// stand out.
fn print_tree(node: &Node, indent: usize) {
    let prefix = "  ".repeat(indent);
    match node {
        Node::Text { content } => {
            let display = content.replace('\n', "\\n").replace(' ', "\u{00B7}");
            println!("{prefix}\"{display}\"");
        }
        Node::Comment { content } => {
            println!("{prefix}{}", format!("<!-- {content} -->").bright_black());
        }
        Node::Element(data) => {
            if data.attrs.is_empty() {
                println!("{prefix}<{}>", data.tag_name.cyan());
            } else {
                let attrs: Vec<String> = data
                    .attrs
                    .iter()
                    .map(|(name, value)| {
                        if value.is_empty() {
                            name.clone()
                        } else {
                            format!("{name}=\"{value}\"")
                        }
                    })
                    .collect();
                println!(
                    "{prefix}<{} {}>",
                    data.tag_name.cyan(),
                    attrs.join(" ").green()
                );
            }
            for child in &data.children {
                print_tree(child, indent + 1);
            }
        }
    }
}
