use std::{
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::Path,
};

use rayon::iter::{
    IntoParallelRefIterator,
    ParallelIterator,
};

use crate::{
    cards::{
        Card,
        DeckRow,
    },
    core::MilimError,
};

/// Import preamble understood by Anki: HTML fields, tab separation, the
/// id column used for dedup on re-import.
pub const HEADER: &str =
    "#html:true\n#separator:tab\n#columns:UUID\tFront\tBack\tTags\n#tags column:4\n";

pub fn write_header<W: Write>(out: &mut W) -> Result<(), MilimError> {
    out.write_all(HEADER.as_bytes())?;
    Ok(())
}

fn write_rows<W: Write>(out: &mut W, rows: &[DeckRow]) -> Result<(), MilimError> {
    for row in rows {
        writeln!(out, "{}\t{}\t{}\t{}", row.id, row.front, row.back, row.tags)?;
    }
    Ok(())
}

/// Serialize a batch of cards to a writer. Cards are independent, so the
/// rendering fans out across threads; rows still land in input order,
/// and each card's rows keep their fixed WT, WP, PT order.
pub fn write_cards<W: Write>(
    out: &mut W,
    cards: &[Card],
    id_prefix: &str,
) -> Result<usize, MilimError> {
    let rendered: Vec<Vec<DeckRow>> = cards.par_iter().map(|card| card.rows(id_prefix)).collect();

    let mut row_count = 0;
    for rows in &rendered {
        write_rows(out, rows)?;
        row_count += rows.len();
    }
    Ok(row_count)
}

/// Write the complete import file. Returns the number of rows written,
/// which may be less than three per card and zero for cards with no
/// renderable field pair.
pub fn write_deck(path: &Path, cards: &[Card], id_prefix: &str) -> Result<usize, MilimError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_header(&mut out)?;
    let row_count = write_cards(&mut out, cards, id_prefix)?;
    out.flush()?;
    Ok(row_count)
}
