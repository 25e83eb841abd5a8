use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::config::Weights;
use crate::scoring::dimensions::Dimension;
use crate::scoring::engine::{Band, ProjectInput, ScoringResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to 100 columns for pipes
fn get_terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(100)
}

fn colorize_band(band: Band, use_colors: bool) -> String {
    if !use_colors {
        return band.to_string();
    }
    match band {
        Band::DarkGreen => band.to_string().green().bold().to_string(),
        Band::Green => band.to_string().green().to_string(),
        Band::Amber => band.to_string().yellow().to_string(),
        Band::Red => band.to_string().red().bold().to_string(),
    }
}

/// Wrap a single annotation line at the terminal width with a hanging
/// indent, so veto warnings stay readable in narrow terminals.
fn wrap_annotation(text: &str, width: usize) -> String {
    let usable = width.saturating_sub(4).max(20);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > usable {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
        .iter()
        .enumerate()
        .map(|(i, l)| {
            if i == 0 {
                format!("  - {}", l)
            } else {
                format!("    {}", l)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a full scoring report for one project.
pub fn format_report(
    input: &ProjectInput,
    result: &ScoringResult,
    weights: &Weights,
    use_colors: bool,
) -> String {
    let width = get_terminal_width();
    let mut out = Vec::new();

    out.push(format!(
        "{} | {} | {} | EUR {:.0}",
        input.country, input.sector, input.asset_class, input.investment_eur
    ));
    let headline = format!(
        "IDRIS score: {:.2} / 100  [{}]{}",
        result.score,
        colorize_band(result.band, use_colors),
        if result.social_veto {
            "  (social veto applied)"
        } else {
            ""
        }
    );
    out.push(if use_colors {
        headline.bold().to_string()
    } else {
        headline
    });
    out.push(String::new());

    out.push("Dimensions (score x weight):".to_string());
    for &dim in &Dimension::ALL {
        out.push(format!(
            "  {:<26} {:>5.1}  x {:.2}",
            dim.label(),
            result.dimensions.get(dim),
            weights.get(dim)
        ));
    }
    out.push(String::new());

    let c = &result.classification;
    out.push("Regulatory classification:".to_string());
    out.push(format!(
        "  EU Taxonomy: eligible={} aligned={} dnsh_pass={} sc={:.1}%",
        c.taxonomy_eligible, c.taxonomy_aligned, c.dnsh_pass, c.sc_score
    ));
    out.push(format!(
        "  SFDR: {}   PAI: {:.1}/100",
        c.sfdr_article, c.pai_score
    ));
    out.push(format!(
        "  TCFD: physical={} transition={}",
        c.tcfd_physical, c.tcfd_transition
    ));
    out.push(format!(
        "  MiFID II: {:.1}/10 - {}",
        c.mifid_suitability, c.mifid_profile
    ));
    out.push(format!(
        "  CSRD: in_scope={} impact_material={} financial_material={}",
        c.csrd_in_scope, c.impact_material, c.financial_material
    ));

    if !result.warnings.is_empty() {
        out.push(String::new());
        let header = "Warnings:".to_string();
        out.push(if use_colors {
            header.yellow().to_string()
        } else {
            header
        });
        for warning in &result.warnings {
            out.push(wrap_annotation(warning, width));
        }
    }

    if !result.strengths.is_empty() {
        out.push(String::new());
        let header = "Strengths:".to_string();
        out.push(if use_colors {
            header.green().to_string()
        } else {
            header
        });
        for strength in &result.strengths {
            out.push(wrap_annotation(strength, width));
        }
    }

    out.join("\n")
}
