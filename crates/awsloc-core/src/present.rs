// crates/awsloc-core/src/present.rs

//! # Result Presenter
//!
//! Renders a successful response either as one JSON document or as an
//! operation-specific human-readable report. Everything writes to a generic
//! [`Write`] so callers choose stdout and tests choose a buffer.

use crate::error::Result;
use crate::model::{
    CreatedIndex, DeletedIndex, IndexDetails, IndexListing, PositionSearch, SuggestionSearch,
    TextSearch, UpdatedIndex,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Debug;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Json,
    #[default]
    Human,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Human
        }
    }
}

pub struct Presenter<W: Write> {
    out: W,
    mode: OutputMode,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, mode: OutputMode) -> Self {
        Self { out, mode }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn created(&mut self, v: &CreatedIndex) -> Result<()> {
        if self.mode == OutputMode::Json {
            return self.json(v);
        }
        writeln!(
            self.out,
            "Created index {} ({}) at {}",
            v.name,
            v.arn,
            timestamp(&v.create_time)
        )?;
        Ok(())
    }

    pub fn deleted(&mut self, v: &DeletedIndex) -> Result<()> {
        if self.mode == OutputMode::Json {
            return self.json(v);
        }
        writeln!(self.out, "Deleted index {}", v.name)?;
        Ok(())
    }

    pub fn updated(&mut self, v: &UpdatedIndex) -> Result<()> {
        if self.mode == OutputMode::Json {
            return self.json(v);
        }
        writeln!(
            self.out,
            "Updated index {} ({}) at {}",
            v.name,
            v.arn,
            timestamp(&v.update_time)
        )?;
        Ok(())
    }

    /// Fixed-field report followed by a tag table.
    pub fn described(&mut self, v: &IndexDetails) -> Result<()> {
        if self.mode == OutputMode::Json {
            return self.json(v);
        }
        let out = &mut self.out;
        writeln!(out, "Index Name:   {}", v.name)?;
        writeln!(out, "Description:  {}", v.description)?;
        writeln!(out, "Pricing Plan: {}", v.pricing_plan.as_deref().unwrap_or("-"))?;
        writeln!(out, "Data Source:  {}", v.data_source)?;
        writeln!(out, "Data Storage: {}", v.intended_use.as_deref().unwrap_or("-"))?;
        writeln!(out, "Create Time:  {}", timestamp(&v.create_time))?;
        writeln!(out, "Update Time:  {}", timestamp(&v.update_time))?;
        writeln!(out, "Index ARN:    {}", v.arn)?;
        if v.tags.is_empty() {
            writeln!(out, "Tags:        (none)")?;
        } else {
            let rows = v
                .tags
                .iter()
                .map(|(k, val)| vec![k.clone(), val.clone()])
                .collect::<Vec<_>>();
            write_table(out, &["Tags", "Value"], &rows, " ")?;
        }
        Ok(())
    }

    /// One aligned row per index; the header is printed even with no rows.
    pub fn listed(&mut self, v: &IndexListing) -> Result<()> {
        if self.mode == OutputMode::Json {
            return self.json(v);
        }
        let rows = v
            .entries
            .iter()
            .map(|e| {
                vec![
                    timestamp(&e.create_time),
                    timestamp(&e.update_time),
                    e.name.clone(),
                    e.pricing_plan.clone().unwrap_or_default(),
                    e.data_source.clone(),
                    e.description.clone(),
                ]
            })
            .collect::<Vec<_>>();
        write_table(
            &mut self.out,
            &["CTime", "MTime", "Index", "Pricing", "DataSource", "Description"],
            &rows,
            " | ",
        )?;
        if v.next_token.is_some() {
            writeln!(self.out, "(more indexes available)")?;
        }
        Ok(())
    }

    pub fn position(&mut self, v: &PositionSearch) -> Result<()> {
        self.search(v, &v.summary, &v.results)
    }

    pub fn suggestions(&mut self, v: &SuggestionSearch) -> Result<()> {
        self.search(v, &v.summary, &v.results)
    }

    pub fn text(&mut self, v: &TextSearch) -> Result<()> {
        self.search(v, &v.summary, &v.results)
    }

    /// Envelope as JSON, or a pretty debug dump of summary then results.
    fn search<E, S, R>(&mut self, envelope: &E, summary: &S, results: &[R]) -> Result<()>
    where
        E: Serialize,
        S: Debug,
        R: Debug,
    {
        if self.mode == OutputMode::Json {
            return self.json(envelope);
        }
        writeln!(self.out, "{summary:#?}")?;
        writeln!(self.out, "{results:#?}")?;
        Ok(())
    }

    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}

fn timestamp(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Pads every column to its widest cell, joining cells with `sep`.
fn write_table<W: Write>(
    out: &mut W,
    header: &[&str],
    rows: &[Vec<String>],
    sep: &str,
) -> std::io::Result<()> {
    let mut widths = header.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let header = header.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    for row in std::iter::once(&header).chain(rows) {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join(sep);
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
