//! Rule table display

use std::path::Path;

use colored::Colorize;
use css_meta::RuleTable;

use crate::commands::load_rules;
use crate::error::Result;

/// Print the effective rule table
pub fn run_rules(cwd: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let table = load_rules(cwd, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{}", render_rules(&table));
    }
    Ok(())
}

/// Human-readable rendering of a rule table
pub fn render_rules(table: &RuleTable) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", "Rule Table".bold()));
    out.push_str(&format!("  {:<16} {}/\n", "App subtree:".dimmed(), table.app_subtree));
    out.push_str(&format!(
        "  {:<16} *-{m}.<ext>, *-{m}.min.<ext>\n",
        "Legacy files:".dimmed(),
        m = table.legacy_marker
    ));

    if table.excluded_subtrees.is_empty() {
        out.push_str(&format!("  {:<16} {}\n", "Excluded:".dimmed(), "(none)".dimmed()));
    } else {
        out.push_str(&format!("  {}\n", "Excluded:".dimmed()));
        for subtree in &table.excluded_subtrees {
            out.push_str(&format!("    {} {}/\n", "-".red(), subtree));
        }
    }

    if !table.pseudo_class_blacklist.is_empty() {
        out.push_str(&format!(
            "  {:<16} {}\n",
            "Pseudo blacklist:".dimmed(),
            table.pseudo_class_blacklist.join(" ")
        ));
    }

    out
}
