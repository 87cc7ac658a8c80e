//! Labeled game samples that seed the similarity index
//!
//! Every terminal move sequence becomes a [`GameRecord`] holding the final
//! board string, the winner and the trajectory embedding. The full set is
//! written once as a batch export and loaded by the index.

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    embedding::{self, Padding},
    tictactoe::{BoardState, LineAnalyzer, MoveSequence, Player, enumerate},
};

/// A labeled terminal game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub board: String,
    pub winner: Option<Player>,
    pub vector: Vec<f32>,
}

impl GameRecord {
    /// Replay `moves` and label the result
    pub fn simulate(moves: &MoveSequence, padding: Padding) -> Self {
        let state = BoardState::from_moves(moves);
        let winner = moves
            .last()
            .and_then(|pos| LineAnalyzer::detect(&state.cells, Some(pos)));
        Self {
            board: state.board_string(),
            winner,
            vector: embedding::encode(moves, padding),
        }
    }
}

/// Label every enumerated game, in enumeration order
pub fn generate(padding: Padding) -> Vec<GameRecord> {
    let records: Vec<GameRecord> = enumerate()
        .iter()
        .map(|moves| GameRecord::simulate(moves, padding))
        .collect();
    info!("generated {} game records", records.len());
    records
}

/// On-disk layout of an exported dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    /// A single JSON array
    #[default]
    Json,
    /// One JSON object per line
    Jsonl,
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DatasetFormat::Json => "json",
            DatasetFormat::Jsonl => "jsonl",
        })
    }
}

impl FromStr for DatasetFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(DatasetFormat::Json),
            "jsonl" | "ndjson" => Ok(DatasetFormat::Jsonl),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("unknown dataset format '{other}' (expected json or jsonl)"),
            }),
        }
    }
}

/// Stream records to `writer`, returning how many were written
pub fn write_records<'a, W, I>(
    writer: &mut W,
    records: I,
    format: DatasetFormat,
) -> Result<usize, crate::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a GameRecord>,
{
    let mut count = 0;
    match format {
        DatasetFormat::Json => {
            writer.write_all(b"[")?;
            for record in records {
                if count > 0 {
                    writer.write_all(b",")?;
                }
                serde_json::to_writer(&mut *writer, record)?;
                count += 1;
            }
            writer.write_all(b"]")?;
        }
        DatasetFormat::Jsonl => {
            for record in records {
                serde_json::to_writer(&mut *writer, record)?;
                writer.write_all(b"\n")?;
                count += 1;
            }
        }
    }
    writer.flush()?;
    Ok(count)
}

/// Write records to a file at `path`
pub fn save(path: &Path, records: &[GameRecord], format: DatasetFormat) -> Result<usize, crate::Error> {
    let file = File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create dataset {}", path.display()),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let count = write_records(&mut writer, records, format)?;
    info!("wrote {count} records to {}", path.display());
    Ok(count)
}

/// Load records written by [`save`] in either format
pub fn load(path: &Path) -> Result<Vec<GameRecord>, crate::Error> {
    let file = File::open(path).map_err(|source| crate::Error::Io {
        operation: format!("open dataset {}", path.display()),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let starts_with_array = loop {
        let buffer = reader.fill_buf()?;
        match buffer.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(offset) => {
                let is_array = buffer[offset] == b'[';
                reader.consume(offset);
                break is_array;
            }
            None if buffer.is_empty() => return Ok(Vec::new()),
            None => {
                let len = buffer.len();
                reader.consume(len);
            }
        }
    };

    if starts_with_array {
        return Ok(serde_json::from_reader(reader)?);
    }

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}

/// Game count per number of moves, ascending by length
pub fn length_report(games: &[MoveSequence]) -> Vec<(usize, usize)> {
    let mut histogram = [0usize; MoveSequence::MAX_LEN + 1];
    for game in games {
        histogram[game.len()] += 1;
    }
    histogram
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(len, &count)| (len, count))
        .collect()
}

/// Pick `count` games at random (with replacement), returning their 0-based
/// positions in `games`
pub fn sample_indices<R: Rng>(games: &[MoveSequence], count: usize, rng: &mut R) -> Vec<usize> {
    if games.is_empty() {
        return Vec::new();
    }
    (0..count).map(|_| rng.random_range(0..games.len())).collect()
}

/// Render a record as three board rows; the first row carries the outcome
/// (`X`, `O` or `D`), the embedding bits and the 1-based game number.
pub fn format_sample(number: usize, record: &GameRecord) -> String {
    let cells: Vec<char> = record.board.chars().collect();
    let row = |r: usize| cells.iter().skip(r * 3).take(3).collect::<String>();
    let outcome = record
        .winner
        .map_or_else(|| "D".to_string(), |w| w.to_string());
    format!(
        "{}\t{}: {} | #{}\n{}\n{}\n",
        row(0),
        outcome,
        embedding::to_bit_string(&record.vector),
        number,
        row(1),
        row(2)
    )
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::tictactoe::enumerate_from;

    fn seq(positions: &[usize]) -> MoveSequence {
        MoveSequence::try_from_positions(positions).unwrap()
    }

    #[test]
    fn simulate_labels_a_win() {
        let record = GameRecord::simulate(&seq(&[0, 3, 1, 4, 2]), Padding::Blank);
        assert_eq!(record.board, "XXXOO⬚⬚⬚⬚");
        assert_eq!(record.winner, Some(Player::X));
        assert_eq!(record.vector.len(), embedding::EMBEDDING_DIM);
    }

    #[test]
    fn simulate_labels_a_draw() {
        let record = GameRecord::simulate(&seq(&[0, 1, 2, 4, 3, 5, 7, 6, 8]), Padding::Blank);
        assert_eq!(record.board, "XOXXOOOXX");
        assert_eq!(record.winner, None);
    }

    #[test]
    fn json_and_jsonl_files_load_back() {
        let games = enumerate_from(&seq(&[4, 0, 8]));
        let records: Vec<GameRecord> = games
            .iter()
            .map(|g| GameRecord::simulate(g, Padding::Blank))
            .collect();
        let dir = tempfile::tempdir().unwrap();

        for format in [DatasetFormat::Json, DatasetFormat::Jsonl] {
            let path = dir.path().join(format!("dataset.{format}"));
            assert_eq!(save(&path, &records, format).unwrap(), records.len());
            assert_eq!(load(&path).unwrap(), records);
        }
    }

    #[test]
    fn json_export_uses_null_winner_and_symbols() {
        let record = GameRecord::simulate(&seq(&[0, 1, 2, 4, 3, 5, 7, 6, 8]), Padding::Blank);
        let mut buffer = Vec::new();
        write_records(&mut buffer, [&record], DatasetFormat::Json).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with(r#"[{"board":"XOXXOOOXX","winner":null,"vector":["#));
        assert!(text.ends_with("]}]"));
    }

    #[test]
    fn length_report_skips_empty_lengths() {
        let games = vec![seq(&[0, 3, 1, 4, 2]), seq(&[0, 1, 2, 4, 3, 5, 7, 6, 8])];
        assert_eq!(length_report(&games), vec![(5, 1), (9, 1)]);
    }

    #[test]
    fn samples_render_three_rows() {
        let record = GameRecord::simulate(&seq(&[0, 3, 1, 4, 2]), Padding::Blank);
        let text = format_sample(7, &record);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("XXX\tX: 1000"));
        assert!(lines[0].ends_with("| #7"));
        assert_eq!(lines[1], "OO⬚");
        assert_eq!(lines[2], "⬚⬚⬚");

        let games = vec![seq(&[0])];
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(sample_indices(&games, 2, &mut rng), vec![0, 0]);
        assert!(sample_indices(&[], 2, &mut rng).is_empty());
    }
}
