//! Writer for the `.nnkp` file consumed by Wannier90-compatible interpolation codes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDateTime;
use log::debug;
use nalgebra::Vector3;

use crate::lattice::UnitCell;
use crate::neighbours::NeighbourRecord;
use crate::Result;

/// Contents of one .nnkp file
#[derive(Debug, Clone)]
pub struct NnkpDocument<'a> {
    pub timestamp: NaiveDateTime,
    pub real_lattice: &'a UnitCell,
    pub recip_lattice: &'a UnitCell,
    pub kpoints: &'a [Vector3<f64>],
    /// Header of the nnkpts block: 3 for a grid, 1 for a k-path
    pub neighbours_per_kpoint: usize,
    pub neighbours: &'a [NeighbourRecord],
}

/// Block-by-block .nnkp writer over any `Write`
pub struct NnkpWriter<W: Write> {
    out: W,
}

impl<W: Write> NnkpWriter<W> {
    pub fn new(out: W) -> Self {
        NnkpWriter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write every block in file order
    pub fn write_document(&mut self, document: &NnkpDocument<'_>) -> Result<()> {
        self.write_date(&document.timestamp)?;
        self.write_calc_only_a()?;
        self.write_lattice("real_lattice", document.real_lattice)?;
        self.write_lattice("recip_lattice", document.recip_lattice)?;
        self.write_kpoints(document.kpoints)?;
        self.write_projections()?;
        self.write_nnkpts(document.neighbours, document.neighbours_per_kpoint)?;
        self.write_exclude_bands()?;
        self.out.flush()?;
        Ok(())
    }

    pub fn write_date(&mut self, timestamp: &NaiveDateTime) -> Result<()> {
        writeln!(
            self.out,
            "File written on {}\n",
            timestamp.format("%d%b%Y at %H:%M:%S")
        )?;
        Ok(())
    }

    // Only the full overlap calculation is supported
    pub fn write_calc_only_a(&mut self) -> Result<()> {
        writeln!(self.out, "calc_only_A  :  F\n")?;
        Ok(())
    }

    /// `real_lattice` or `recip_lattice` block, one lattice vector per line
    pub fn write_lattice(&mut self, name: &str, cell: &UnitCell) -> Result<()> {
        writeln!(self.out, "begin {}", name)?;
        for row in cell.rows() {
            writeln!(self.out, " {:>11.7} {:>11.7} {:>11.7}", row.x, row.y, row.z)?;
        }
        writeln!(self.out, "end {}\n", name)?;
        Ok(())
    }

    pub fn write_kpoints(&mut self, kpoints: &[Vector3<f64>]) -> Result<()> {
        writeln!(self.out, "begin kpoints")?;
        writeln!(self.out, "{:>6}", kpoints.len())?;
        for k in kpoints {
            writeln!(self.out, " {:>13.8} {:>13.8} {:>13.8}", k.x, k.y, k.z)?;
        }
        writeln!(self.out, "end kpoints\n")?;
        Ok(())
    }

    // Projections are chosen by the downstream code; the block stays empty
    pub fn write_projections(&mut self) -> Result<()> {
        writeln!(self.out, "begin projections")?;
        writeln!(self.out, "end projections\n")?;
        Ok(())
    }

    pub fn write_nnkpts(
        &mut self,
        neighbours: &[NeighbourRecord],
        neighbours_per_kpoint: usize,
    ) -> Result<()> {
        writeln!(self.out, "begin nnkpts")?;
        writeln!(self.out, "{:4}", neighbours_per_kpoint)?;
        for record in neighbours {
            writeln!(self.out, "{}", record)?;
        }
        writeln!(self.out, "end nnkpts\n")?;
        Ok(())
    }

    pub fn write_exclude_bands(&mut self) -> Result<()> {
        writeln!(self.out, "begin exclude_bands")?;
        writeln!(self.out, "{:4}", 0)?;
        writeln!(self.out, "end exclude_bands")?;
        Ok(())
    }
}

/// Write `document` to `path`, replacing any existing file
pub fn write_nnkp(path: &Path, document: &NnkpDocument<'_>) -> Result<()> {
    debug!("Writing {}", path.display());
    let mut writer = NnkpWriter::new(BufWriter::new(File::create(path)?));
    writer.write_document(document)
}
