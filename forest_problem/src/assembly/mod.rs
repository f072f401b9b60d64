pub mod bounds;
pub mod error;
pub mod eval;
pub mod finalize;
pub mod linear;
pub mod tables;
pub mod tensors;
mod emit;
mod generator;
mod objectives;

pub use objectives::{discount_weights, CARBON_OBJECTIVE, HARVEST_OBJECTIVE, NPV_OBJECTIVE, WOOD_OBJECTIVE};

use crate::config::ProblemConfig;
use crate::Problem;
use bounds::{payoff_table_method, ObjectiveSolver};
use error::{InputError, ProblemError};
use finalize::{build_schedule_map, with_bounds, ScheduleMap};
use generator::Generator;
use tables::ForestTables;
use tensors::{build_tensors, StandTensors};
use tracing::info;

/// An assembled problem before bounds estimation.
#[derive(Debug, Clone)]
pub struct AssembledProblem {
    pub problem: Problem,
    pub schedules: ScheduleMap,
    pub stands: Vec<StandTensors>,
}

/// Load the tables under `config.data_dir` and lower them into a `Problem`.
pub fn assemble(config: &ProblemConfig) -> Result<AssembledProblem, ProblemError> {
    config.validate()?;
    let tables = ForestTables::load(config)?;
    Ok(assemble_tables(&tables, config)?)
}

/// Lower already-loaded tables into a `Problem`.
pub fn assemble_tables(tables: &ForestTables, config: &ProblemConfig) -> Result<AssembledProblem, InputError> {
    config.validate()?;
    let stands = build_tensors(tables)?;
    let mut gen = Generator::new(config, &stands);

    // 1) constants, decision vectors and aggregators
    gen.declare_stands();
    gen.declare_aggregators();

    // 2) selection, aggregator definitions, carbon floor
    gen.emit_constraints();

    // 3) objectives
    gen.emit_objectives(tables.initial_wood_volume());

    let problem = gen.into_problem();
    problem.log_summary();
    let schedules = build_schedule_map(&stands);
    Ok(AssembledProblem {
        problem,
        schedules,
        stands,
    })
}

/// Assemble, estimate objective bounds with `solver` and annotate the objectives.
pub fn forest_problem(
    config: &ProblemConfig,
    solver: &dyn ObjectiveSolver,
) -> Result<(Problem, ScheduleMap), ProblemError> {
    let assembled = assemble(config)?;
    let bounds = payoff_table_method(&assembled.problem, solver)?;
    let problem = with_bounds(&assembled.problem, &bounds.ideal, &bounds.nadir)?;
    info!(name = %problem.name, "problem finalized");
    Ok((problem, assembled.schedules))
}
