//! Chip formatter
//!
//! Walks a decoded chip tree and prints one line per pin and per part.

use chp_core::{Chip, Circuit, Part, PinArena, PinDirection, PinId};

use crate::config::RenderConfig;
use crate::printer::Printer;

/// Format a complete circuit
pub fn format_circuit(circuit: &Circuit, config: &RenderConfig) -> String {
    let mut printer = Printer::new(config.clone());
    format_chip(&circuit.chip, &circuit.pins, &mut printer);
    printer.finish()
}

fn format_chip(chip: &Chip, pins: &PinArena, p: &mut Printer) {
    p.writeln(&format!("{} {{", chip.name));
    p.indented(|p| {
        format_help(chip, p);
        format_pins(chip, pins, p);
        for part in &chip.parts {
            format_part(part, pins, p);
        }
    });
    p.writeln("}");
}

fn format_help(chip: &Chip, p: &mut Printer) {
    let Some(help) = chip.help.as_ref().filter(|_| p.config().show_help) else {
        return;
    };
    for line in help {
        if line.is_empty() {
            p.writeln("#");
        } else {
            p.writeln(&format!("# {}", line));
        }
    }
    p.newline();
}

fn format_pins(chip: &Chip, pins: &PinArena, p: &mut Printer) {
    let show_directions = p.config().show_directions;
    for (position, &id) in chip.pins.iter().enumerate() {
        match chip.direction(position).filter(|_| show_directions) {
            Some(PinDirection::None) => {}
            Some(dir) => p.writeln(&format!("PIN {} {}", pins[id], dir.label())),
            None => p.writeln(&format!("PIN {}", pins[id])),
        }
    }
}

fn format_part(part: &Part, pins: &PinArena, p: &mut Printer) {
    match part {
        Part::Chip(chip) => format_chip(chip, pins, p),
        Part::FlipFlop(ff) => {
            let op = format!(
                "{}{}{}",
                part.mnemonic(),
                pins[ff.state[0]].bit(),
                pins[ff.state[1]].bit()
            );
            p.writeln(&part_line(&op, &part.inputs(), &part.outputs(), pins));
        }
        _ => p.writeln(&part_line(part.mnemonic(), &part.inputs(), &part.outputs(), pins)),
    }
}

/// `OP in... => out...`
fn part_line(op: &str, inputs: &[PinId], outputs: &[PinId], pins: &PinArena) -> String {
    let mut line = String::from(op);
    for &id in inputs {
        line.push(' ');
        line.push_str(&pins[id].to_string());
    }
    line.push_str(" =>");
    for &id in outputs {
        line.push(' ');
        line.push_str(&pins[id].to_string());
    }
    line
}
