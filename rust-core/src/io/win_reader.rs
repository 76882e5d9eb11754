//! Reader for the Wannier90 `.win` input: unit cell, Monkhorst-Pack grid and k-point list.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use nalgebra::{Matrix3, Vector3};

use crate::interfaces::{Space, SpinChannel};
use crate::lattice::UnitCell;
use crate::{NnkpError, Result};

/// Length unit of a unit_cell_cart block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Bohr,
    Angstrom,
}

impl LengthUnit {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "bohr" => Some(LengthUnit::Bohr),
            "ang" | "angstrom" => Some(LengthUnit::Angstrom),
            _ => None,
        }
    }
}

/// Everything the neighbour generation and the .nnkp writer need from a .win file
#[derive(Debug, Clone)]
pub struct WinInput {
    /// Real-space lattice in Ångström
    pub real_lattice: UnitCell,
    /// Reciprocal lattice of `real_lattice`
    pub recip_lattice: UnitCell,
    /// Raw mp_grid values; validated when the calculation mode is resolved
    pub mp_grid: Vec<i64>,
    /// Fractional k-point coordinates in file order
    pub kpoints: Vec<Vector3<f64>>,
}

/// `<case>.win`, `<case>.winup` or `<case>.windn`
pub fn win_file_name(case_name: &str, spin: SpinChannel) -> PathBuf {
    PathBuf::from(format!("{}.win{}", case_name, spin.suffix()))
}

pub fn read_win(path: &Path) -> Result<WinInput> {
    debug!("Reading {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_win(&content)
}

pub fn parse_win(content: &str) -> Result<WinInput> {
    let real_lattice = parse_unit_cell_cart(content)?;
    let recip_lattice = real_lattice.reciprocal()?;
    let mp_grid = parse_mp_grid(content)?;
    let kpoints = parse_kpoints(content)?;

    debug!(
        "Parsed mp_grid {:?} and {} k-points",
        mp_grid,
        kpoints.len()
    );

    Ok(WinInput {
        real_lattice,
        recip_lattice,
        mp_grid,
        kpoints,
    })
}

/// Lines with 1-based numbers, comments (`!`, `#`) and trailing whitespace removed
fn lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content.lines().enumerate().filter_map(|(n, line)| {
        let trimmed = line.trim();
        if trimmed.starts_with('!') || trimmed.starts_with('#') {
            None
        } else {
            Some((n + 1, trimmed))
        }
    })
}

fn contains_keyword(line: &str, keyword: &str) -> bool {
    line.to_ascii_lowercase().contains(keyword)
}

fn parse_floats(line_number: usize, line: &str) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| NnkpError::Parse {
                line: line_number,
                message: format!("expected a number, found '{}'", token),
            })
        })
        .collect()
}

fn parse_vector(line_number: usize, line: &str) -> Result<Vector3<f64>> {
    let values = parse_floats(line_number, line)?;
    if values.len() < 3 {
        return Err(NnkpError::Parse {
            line: line_number,
            message: format!("expected 3 components, found {}", values.len()),
        });
    }
    Ok(Vector3::new(values[0], values[1], values[2]))
}

/// Lines strictly between `begin <name>` and `end <name>`
fn block<'a>(
    content: &'a str,
    name: &'static str,
    end: &'static str,
) -> Result<Vec<(usize, &'a str)>> {
    let begin = format!("begin {}", name);
    let mut lines = lines(content).skip_while(|(_, line)| !contains_keyword(line, &begin));
    if lines.next().is_none() {
        return Err(NnkpError::MissingBlock(name));
    }

    let mut body = Vec::new();
    for (n, line) in lines {
        if contains_keyword(line, end) {
            return Ok(body);
        }
        body.push((n, line));
    }
    Err(NnkpError::MissingBlock(end))
}

/// Real-space lattice from the `unit_cell_cart` block.
///
/// An optional first line names the unit (`bohr` or `ang`); without it the vectors are in
/// Ångström.
pub fn parse_unit_cell_cart(content: &str) -> Result<UnitCell> {
    let body = block(content, "unit_cell_cart", "end unit_cell_cart")?;
    let mut body = body.into_iter().filter(|(_, line)| !line.is_empty()).peekable();

    let unit = match body.peek().and_then(|(_, line)| LengthUnit::parse(line)) {
        Some(unit) => {
            body.next();
            unit
        }
        None => LengthUnit::Angstrom,
    };

    let mut rows = Vec::with_capacity(3);
    for (n, line) in body.by_ref().take(3) {
        rows.push(parse_vector(n, line)?.transpose());
    }
    if rows.len() != 3 {
        return Err(NnkpError::MissingBlock("unit_cell_cart vectors"));
    }

    let vectors = Matrix3::from_rows(&rows);
    match unit {
        LengthUnit::Bohr => UnitCell::from_bohr(vectors),
        LengthUnit::Angstrom => UnitCell::from_matrix(vectors, Space::Real),
    }
}

/// Grid dimensions from `mp_grid : A B C` (`=` is accepted in place of `:`)
pub fn parse_mp_grid(content: &str) -> Result<Vec<i64>> {
    let (n, line) = lines(content)
        .find(|(_, line)| contains_keyword(line, "mp_grid"))
        .ok_or(NnkpError::MissingBlock("mp_grid"))?;

    let values = line
        .split_once(|c: char| c == ':' || c == '=')
        .map(|(_, values)| values)
        .ok_or_else(|| NnkpError::Parse {
            line: n,
            message: "expected 'mp_grid : A B C'".to_string(),
        })?;

    values
        .split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| NnkpError::Parse {
                line: n,
                message: format!("expected an integer grid dimension, found '{}'", token),
            })
        })
        .collect()
}

/// Ordered k-point list from the `kpoints` block; columns after the third are ignored
pub fn parse_kpoints(content: &str) -> Result<Vec<Vector3<f64>>> {
    block(content, "kpoints", "end kpoints")?
        .into_iter()
        .filter(|(_, line)| !line.is_empty())
        .map(|(n, line)| parse_vector(n, line))
        .collect()
}
