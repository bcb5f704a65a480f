use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::{Assessment, RiskTier, Scale, ScaleResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn colorize_risk(padded_label: &str, risk: RiskTier, use_colors: bool) -> String {
    if !use_colors {
        return padded_label.to_string();
    }
    match risk {
        RiskTier::Low => padded_label.green().to_string(),
        RiskTier::Medium => padded_label.yellow().to_string(),
        RiskTier::High => padded_label.red().bold().to_string(),
    }
}

/// Format the assessment as one aligned line per scale:
/// name, score/max, supplied/total params, risk, interpretation.
/// No headers; interpretation is truncated to the terminal width.
pub fn format_assessment_table(assessment: &Assessment, use_colors: bool) -> String {
    let term_width = get_terminal_width();

    // Name column: 8 ("omqSOFA" is 7). Score column: 5 ("24/27").
    // Params column: 6 ("9 of 9"). Risk column: 11 ("Medium risk").
    let separator = "  ";
    let fixed_width =
        8 + separator.len() + 5 + separator.len() + 6 + separator.len() + 11 + separator.len();

    assessment
        .iter()
        .map(|(scale, result)| {
            // Pad before styling so ANSI codes don't count against the width.
            let name_padded = format!("{:<8}", scale.name());
            let score_str = format!("{}/{}", result.score, scale.max_score());
            let params_str = format!("{} of {}", result.used_params, result.total_params);
            let risk_padded = format!("{:<11}", result.risk.label());

            let interpretation = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_text(result.interpretation, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_text(result.interpretation, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                result.interpretation.to_string()
            };

            if use_colors {
                format!(
                    "{}{sep}{:>5}{sep}{:>6}{sep}{}{sep}{}",
                    name_padded.bold(),
                    score_str,
                    params_str,
                    colorize_risk(&risk_padded, result.risk, true),
                    interpretation,
                    sep = separator
                )
            } else {
                format!(
                    "{}{sep}{:>5}{sep}{:>6}{sep}{}{sep}{}",
                    name_padded,
                    score_str,
                    params_str,
                    risk_padded,
                    interpretation,
                    sep = separator
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single scale with detailed multi-line output (for verbose mode)
pub fn format_scale_detail(scale: Scale, result: &ScaleResult, use_colors: bool) -> String {
    let risk = colorize_risk(result.risk.label(), result.risk, use_colors);
    if use_colors {
        format!(
            "{}\n  Score: {} of {}\n  Parameters: {} of {} supplied\n  Risk: {}\n  {}",
            scale.name().bold(),
            result.score,
            scale.max_score(),
            result.used_params,
            result.total_params,
            risk,
            result.interpretation
        )
    } else {
        format!(
            "{}\n  Score: {} of {}\n  Parameters: {} of {} supplied\n  Risk: {}\n  {}",
            scale.name(),
            result.score,
            scale.max_score(),
            result.used_params,
            result.total_params,
            risk,
            result.interpretation
        )
    }
}

/// Format the assessment as tab-separated values for scripting
/// Columns: scale_id, score, used_params, total_params, risk_class
/// (no headers, no colors)
pub fn format_tsv(assessment: &Assessment) -> String {
    assessment
        .iter()
        .map(|(scale, result)| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                scale.id(),
                result.score,
                result.used_params,
                result.total_params,
                result.risk.class_code()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
