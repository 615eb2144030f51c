//! Plain-text rendering of the three views, used by the terminal frontend.

use std::fmt::Write as _;

use crate::drug::DrugId;
use crate::levels::{LevelsReport, BASELINE_LEVEL};
use crate::profile::DrugProfile;
use crate::simulator::{Position, SynapseSimulator};

const BAR_WIDTH: usize = 20;

pub fn render_drug_list(selected: Option<DrugId>) -> String {
    let mut out = String::new();
    for drug in DrugId::ALL {
        let marker = if selected == Some(drug) { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {:<10} {} {}", drug.key(), drug.icon(), drug.card_title());
    }
    out
}

pub fn render_profile(profile: &DrugProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", profile.name);
    let _ = writeln!(out, "{}", "=".repeat(profile.name.chars().count()));
    let _ = writeln!(out, "{}\n", profile.description);
    let _ = writeln!(out, "Componente Activo\n  {}\n", profile.active_component);
    let _ = writeln!(out, "Mecanismo de Acción\n  {}\n", profile.mechanism);
    if let Some(diagram) = profile.diagram {
        let _ = writeln!(
            out,
            "Diagrama Científico [{}]\n  {}\n",
            diagram.src_or_placeholder(),
            diagram.caption
        );
    }
    let _ = writeln!(out, "Efectos en el Organismo");
    for effect in profile.effects {
        let _ = writeln!(out, "  • {effect}");
    }
    let _ = writeln!(out, "\nAdvertencia: {}", profile.warning);
    out
}

pub fn render_levels(report: &LevelsReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Niveles de Neurotransmisores");
    let _ = writeln!(out, "{}\n", report.intro());

    let with_drug = report.with_drug_caption();
    let caption_width = with_drug.chars().count().max("Normal".len());
    for entry in report.entries {
        let _ = writeln!(
            out,
            "{} {} {}",
            entry.name,
            entry.change.glyph(),
            entry.change_label
        );
        let _ = writeln!(
            out,
            "  {:<w$} {} {:>3}",
            "Normal",
            bar(BASELINE_LEVEL),
            BASELINE_LEVEL,
            w = caption_width
        );
        let _ = writeln!(
            out,
            "  {:<w$} {} {:>3}",
            with_drug,
            bar(entry.clamped_level()),
            entry.clamped_level(),
            w = caption_width
        );
        let _ = writeln!(out, "  {}\n", entry.description);
    }
    let _ = writeln!(out, "Resumen de Efectos\n  {}", report.summary);
    out
}

fn bar(level: u8) -> String {
    let filled = usize::from(level.min(100)) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Draws the synapse panel: presynaptic terminal on the left, receptors on
/// the right, `o` for neurotransmitters and `#` for drug molecules.
pub fn render_frame(sim: &SynapseSimulator, width: usize, height: usize) -> String {
    let width = width.max(32);
    let height = height.max(6);
    let mut grid = vec![vec![' '; width]; height];

    let left = width / 4;
    let right = width - width / 4 - 1;
    for row in grid.iter_mut() {
        row[left] = ':';
        row[right] = ':';
    }
    let mid = height / 2;
    grid[mid][left] = 'O';
    grid[mid][right] = 'U';
    put_text(&mut grid[0], 0, "Presináptica");
    let post = "Postsináptica";
    put_text(&mut grid[0], width.saturating_sub(post.chars().count()), post);

    for p in sim.interferents() {
        let (col, row) = cell(p.position, width, height);
        grid[row][col] = '#';
    }
    for p in sim.signals() {
        let (col, row) = cell(p.position, width, height);
        grid[row][col] = 'o';
    }

    let border = format!("+{}+", "-".repeat(width));
    let mut out = String::new();
    let _ = writeln!(out, "{border}");
    for row in &grid {
        let line: String = row.iter().collect();
        let _ = writeln!(out, "|{line}|");
    }
    let _ = writeln!(out, "{border}");

    let config = sim.config();
    match sim.effect_label() {
        Some(label) => {
            let _ = writeln!(out, ">> {label} <<");
        }
        None => {
            let _ = writeln!(out);
        }
    }
    let _ = writeln!(
        out,
        "o {}   # {}   O Vesículas   U Receptores   [tick {} | {} | {}]",
        config.primary_neurotransmitter,
        config.molecule,
        sim.tick_count(),
        if sim.is_playing() { "playing" } else { "paused" },
        sim.drug()
    );
    out
}

fn cell(pos: Position, width: usize, height: usize) -> (usize, usize) {
    let col = ((pos.x.clamp(0.0, 100.0) / 100.0) * width as f32) as usize;
    let row = ((pos.y.clamp(0.0, 100.0) / 100.0) * height as f32) as usize;
    (col.min(width - 1), row.min(height - 1))
}

fn put_text(row: &mut [char], start: usize, text: &str) {
    for (slot, ch) in row.iter_mut().skip(start).zip(text.chars()) {
        *slot = ch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::levels;
    use crate::profile::profile;
    use crate::simulator::ScriptedRandom;

    #[test]
    fn bars_scale_with_level() {
        assert_eq!(bar(0), format!("[{}]", ".".repeat(20)));
        assert_eq!(bar(50), format!("[{}{}]", "#".repeat(10), ".".repeat(10)));
        assert_eq!(bar(100), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn levels_text_lists_entries_in_order() {
        let text = render_levels(levels(DrugId::Cocaina));
        let dop = text.find("Dopamina ↗ Aumenta Mucho").unwrap();
        let ser = text.find("Serotonina ↗ Aumenta").unwrap();
        let nor = text.find("Norepinefrina ↗ Aumenta").unwrap();
        assert!(dop < ser && ser < nor);
        assert!(text.contains("Con Cocaína"));
        assert!(text.contains(" 95"));
    }

    #[test]
    fn profile_text_contains_every_section() {
        let p = profile(DrugId::Nicotina);
        let text = render_profile(p);
        assert!(text.starts_with("Nicotina\n"));
        assert!(text.contains("Componente Activo"));
        assert!(text.contains("Mecanismo de Acción"));
        assert!(text.contains("/images/nicotina-cycle.png"));
        assert_eq!(text.matches("  • ").count(), p.effects.len());
        assert!(text.contains(p.warning));
    }

    #[test]
    fn frame_draws_particles_and_effect_label() {
        let mut sim = SynapseSimulator::new(DrugId::Alcohol);
        sim.play();
        sim.tick(&mut ScriptedRandom::new([0.99, 0.5, 0.9, 0.5, 0.2]));

        let frame = render_frame(&sim, 40, 10);
        let lines: Vec<&str> = frame.lines().collect();
        // border + 10 rows + border + effect + legend
        assert_eq!(lines.len(), 14);
        // Signal at (22, 60) -> column 8, row 6; interferent at (50, 26) -> column 20, row 2.
        assert_eq!(lines[7].chars().nth(9), Some('o'));
        assert_eq!(lines[3].chars().nth(21), Some('#'));
        assert!(frame.contains(">> Inhibición de Glutamato <<"));
        assert!(frame.contains("o Glutamato"));
        assert!(frame.contains("# Etanol"));
    }

    #[test]
    fn drug_list_marks_the_selection() {
        let text = render_drug_list(Some(DrugId::Marihuana));
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().nth(1).unwrap().starts_with("* marihuana"));
        assert!(text.lines().next().unwrap().starts_with("  alcohol"));
    }
}
