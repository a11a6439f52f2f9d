use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;
use trendlens_types::{Timeframe, TrendPoint};

/// Interest over time as `date,value` CSV, to stdout or to `output`.
pub fn handle(
    ctx: &HandlerContext,
    keyword: &str,
    timeframe: Timeframe,
    output: Option<&Path>,
) -> Result<()> {
    let keyword = keyword.trim();
    let points = ctx.block_on(ctx.api().over_time(keyword, timeframe))?;

    match output {
        None => {
            let stdout = std::io::stdout();
            write_csv(stdout.lock(), &points)
        }
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_csv(file, &points)?;
            info!(keyword, rows = points.len(), path = %path.display(), "export written");

            ctx.render(presenters::present_export(
                keyword,
                timeframe.as_str(),
                points.len(),
                path,
            ))
        }
    }
}

fn write_csv<W: Write>(writer: W, points: &[TrendPoint]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["date", "value"])?;
    for point in points {
        let value = point.value.to_string();
        csv.write_record([point.date.as_str(), value.as_str()])?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_has_header_and_rows() -> Result<()> {
        let mut buf = Vec::new();
        let points = vec![
            TrendPoint::new("2024-01-01", 10),
            TrendPoint::new("2024-02-01", 50),
        ];
        write_csv(&mut buf, &points)?;

        let text = String::from_utf8(buf)?;
        assert_eq!(text, "date,value\n2024-01-01,10\n2024-02-01,50\n");
        Ok(())
    }

    #[test]
    fn test_empty_series_writes_header_only() -> Result<()> {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[])?;
        assert_eq!(String::from_utf8(buf)?, "date,value\n");
        Ok(())
    }
}
