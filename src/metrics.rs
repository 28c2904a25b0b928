use arrow::array::{Float64Array, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_writer::ArrowWriter;
use std::fs::File;
use std::sync::Arc;

use crate::types::Cost;

/// One solved case worth of instrumentation, as written to parquet.
#[derive(Debug)]
pub struct SolveRecord {
    pub case_index: usize,
    pub n_waypoints: usize,
    pub visited: usize,
    pub skipped: usize,
    pub frontier_pops: usize,
    pub stale_pops: usize,
    pub relaxations: usize,
    pub frontier_peak: usize,
    pub travel_time: Cost,
    pub dwell_time: Cost,
    pub penalty: Cost,
    pub total_time: Cost,
    pub elapsed: f64,
}

pub fn serialize_to_parquet(
    records: &[SolveRecord],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let case_indices: Int64Array = records.iter().map(|r| r.case_index as i64).collect();
    let waypoint_counts: Int64Array = records.iter().map(|r| r.n_waypoints as i64).collect();
    let visited_counts: Int64Array = records.iter().map(|r| r.visited as i64).collect();
    let skipped_counts: Int64Array = records.iter().map(|r| r.skipped as i64).collect();
    let frontier_pops: Int64Array = records.iter().map(|r| r.frontier_pops as i64).collect();
    let stale_pops: Int64Array = records.iter().map(|r| r.stale_pops as i64).collect();
    let relaxations: Int64Array = records.iter().map(|r| r.relaxations as i64).collect();
    let frontier_peaks: Int64Array = records.iter().map(|r| r.frontier_peak as i64).collect();
    let travel_times: Float64Array = records.iter().map(|r| r.travel_time).collect();
    let dwell_times: Float64Array = records.iter().map(|r| r.dwell_time).collect();
    let penalties: Float64Array = records.iter().map(|r| r.penalty).collect();
    let total_times: Float64Array = records.iter().map(|r| r.total_time).collect();
    let elapsed_times: Float64Array = records.iter().map(|r| r.elapsed).collect();

    // Arrow schema
    let schema = Schema::new(vec![
        Field::new("case_index", DataType::Int64, false),
        Field::new("n_waypoints", DataType::Int64, false),
        Field::new("visited", DataType::Int64, false),
        Field::new("skipped", DataType::Int64, false),
        Field::new("frontier_pops", DataType::Int64, false),
        Field::new("stale_pops", DataType::Int64, false),
        Field::new("relaxations", DataType::Int64, false),
        Field::new("frontier_peak", DataType::Int64, false),
        Field::new("travel_time", DataType::Float64, false),
        Field::new("dwell_time", DataType::Float64, false),
        Field::new("penalty", DataType::Float64, false),
        Field::new("total_time", DataType::Float64, false),
        Field::new("elapsed", DataType::Float64, false),
    ]);

    let batch = RecordBatch::try_new(
        Arc::new(schema),
        vec![
            Arc::new(case_indices),
            Arc::new(waypoint_counts),
            Arc::new(visited_counts),
            Arc::new(skipped_counts),
            Arc::new(frontier_pops),
            Arc::new(stale_pops),
            Arc::new(relaxations),
            Arc::new(frontier_peaks),
            Arc::new(travel_times),
            Arc::new(dwell_times),
            Arc::new(penalties),
            Arc::new(total_times),
            Arc::new(elapsed_times),
        ],
    )?;

    let file = File::create(filename)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}
