//! Command-line front end for Textmas trees.

use anyhow::{bail, Context};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use serde_json::json;
use std::collections::BTreeSet;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use textmas_core::constants::{DEFAULT_STYLE_INDEX, DEFAULT_TOPPER};
use textmas_core::layout::content_stream;
use textmas_core::session::Viewing;
use textmas_core::share::decode_input;
use textmas_core::{
    layout, render_plain, Config, LayoutStrategy, RenderMode, Session, TreeRow, TreeState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "textmas", about = "Textmas tree generator", version)]
struct Cli {
    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Encode a message into a share link
    Encode {
        /// Message text (read from --file or stdin when omitted)
        #[arg(short, long, conflicts_with = "file")]
        content: Option<String>,
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Glyph shown above the tree
        #[arg(short, long, default_value = DEFAULT_TOPPER)]
        topper: String,
        /// Content-stream positions to highlight, comma separated
        #[arg(long, value_delimiter = ',')]
        highlight: Vec<usize>,
        #[arg(long, default_value_t = DEFAULT_STYLE_INDEX)]
        style: i64,
        /// Share link base (defaults to TEXTMAS_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
        /// Print only the token instead of the full link
        #[arg(long)]
        token_only: bool,
    },
    /// Decode a share link, fragment or bare token
    Decode { input: String },
    /// Draw the tree carried by a share link
    Render {
        input: String,
        /// Show highlighted glyphs only, dimming the rest
        #[arg(long, conflicts_with = "marking")]
        reveal: bool,
        /// Bracket highlighted glyphs
        #[arg(long)]
        marking: bool,
        /// Reveal as after a shake, then hide once TEXTMAS_REVEAL_MS elapses
        #[arg(long, conflicts_with_all = ["reveal", "marking"])]
        shake: bool,
        /// Lay out without decorations
        #[arg(long)]
        classic: bool,
    },
}

/// Result of driving a fresh editor through to a generated link.
struct Generated {
    tree: TreeState,
    token: String,
    url: String,
}

fn read_content(content: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(content) = content {
        return Ok(content);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

/// Run the editor flow: content, topper and style first, then highlights.
fn generate_tree(
    content: &str,
    topper: &str,
    highlights: &[usize],
    style: i64,
    base_url: &str,
) -> anyhow::Result<Generated> {
    let mut session = Session::default();
    let Some(editor) = session.editor_mut() else {
        bail!("fresh session is not editable");
    };
    editor.set_content(content);
    editor.set_topper(topper);
    editor.set_style_index(Some(style));

    let picked: BTreeSet<usize> = highlights.iter().copied().collect();
    if !picked.is_empty() {
        let stream_len = content_stream(&editor.tree().content).len();
        editor.toggle_highlight_mode();
        for index in picked {
            if index >= stream_len {
                tracing::warn!(index, stream_len, "highlight lies outside the message");
            }
            editor.toggle_highlight(index);
        }
        editor.toggle_highlight_mode();
    }

    let url = session.generate(base_url)?;
    let Session::Locked(locked) = &session else {
        bail!("session did not lock after generating");
    };
    Ok(Generated {
        tree: locked.tree().clone(),
        token: locked.token().to_string(),
        url,
    })
}

fn format_encode_output(
    generated: &Generated,
    token_only: bool,
    json: bool,
) -> anyhow::Result<String> {
    if json {
        let value = json!({
            "token": generated.token,
            "url": generated.url,
            "tree": generated.tree,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    if token_only {
        Ok(generated.token.clone())
    } else {
        Ok(generated.url.clone())
    }
}

fn format_decode_output(tree: &TreeState, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(tree)?);
    }
    let highlights = tree
        .highlights
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let style = tree
        .style_index
        .map_or_else(|| "-".to_string(), |style| style.to_string());
    Ok(format!(
        "Topper: {}\nContent: {}\nHighlights: {}\nStyle: {}",
        tree.display_topper(),
        tree.content,
        if highlights.is_empty() { "-" } else { highlights.as_str() },
        style
    ))
}

fn render_mode(reveal: bool, marking: bool) -> RenderMode {
    if marking {
        RenderMode::Marking
    } else if reveal {
        RenderMode::Revealed
    } else {
        RenderMode::Normal
    }
}

fn frame(session: &Session, rows: &[TreeRow]) -> String {
    let mode = if session.is_revealed() {
        RenderMode::Revealed
    } else {
        RenderMode::Normal
    };
    render_plain(session.tree(), rows, mode)
}

/// Frames a viewer sees after shaking at `start`: revealed at once, then
/// hidden again when the auto-hide deadline passes.
fn shake_frames(
    session: &mut Session,
    rows: &[TreeRow],
    start: Instant,
    duration: Duration,
) -> Vec<String> {
    session.shake(start, duration);
    let mut frames = vec![frame(session, rows)];
    if session.tick(start + duration) {
        frames.push(frame(session, rows));
    }
    frames
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "textmas_cli=warn,textmas_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let Cli { json, command } = Cli::parse();
    let config = Config::from_env();

    match command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
        Commands::Encode {
            content,
            file,
            topper,
            highlight,
            style,
            base_url,
            token_only,
        } => {
            let content = read_content(content, file)?;
            let base_url = base_url.unwrap_or(config.base_url);
            let generated = generate_tree(&content, &topper, &highlight, style, &base_url)
                .context("Encode failed")?;
            println!("{}", format_encode_output(&generated, token_only, json)?);
        }
        Commands::Decode { input } => {
            let tree = decode_input(&input).context("Decode failed")?;
            println!("{}", format_decode_output(&tree, json)?);
        }
        Commands::Render {
            input,
            reveal,
            marking,
            shake,
            classic,
        } => {
            let tree = decode_input(&input).context("Render failed")?;
            let strategy = if classic {
                LayoutStrategy::Classic
            } else {
                config.strategy
            };
            tracing::debug!(strategy = strategy.label(), "rendering tree");
            let rows = layout(&tree, strategy);
            if !shake {
                print!("{}", render_plain(&tree, &rows, render_mode(reveal, marking)));
                return Ok(());
            }

            let mut session = Session::Viewing(Viewing::new(tree));
            let duration = config.reveal_duration;
            let frames = shake_frames(&mut session, &rows, Instant::now(), duration);
            for (n, frame) in frames.iter().enumerate() {
                if n > 0 {
                    std::thread::sleep(duration);
                    println!();
                }
                print!("{}", frame);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
