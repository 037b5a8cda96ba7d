//! Tests for state modules

#[cfg(test)]
mod tests {
    use super::super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    use egui::{pos2, vec2};
    use epiview_types::{
        Agent, AgentWorld, Compartments, Engine, Model, Population, ResultRecord, THREE_COLORS,
    };

    fn record(pairs: &[(&str, f64)]) -> ResultRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    fn compartments(pairs: &[(&str, f64)]) -> Compartments {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    /// Engine that records the chunk sizes it was asked to step.
    struct ScriptedEngine {
        chunks: Rc<RefCell<Vec<u64>>>,
        after_run_calls: Rc<RefCell<u32>>,
    }

    impl ScriptedEngine {
        fn new() -> (Self, Rc<RefCell<Vec<u64>>>, Rc<RefCell<u32>>) {
            let chunks = Rc::new(RefCell::new(Vec::new()));
            let after = Rc::new(RefCell::new(0));
            (
                Self {
                    chunks: chunks.clone(),
                    after_run_calls: after.clone(),
                },
                chunks,
                after,
            )
        }
    }

    impl Engine for ScriptedEngine {
        fn initialize(&mut self, _model: &mut Model) {}

        fn step(&mut self, model: &mut Model, steps: u64) -> Vec<ResultRecord> {
            self.chunks.borrow_mut().push(steps);
            (0..steps).map(|_| model.compartments.to_record()).collect()
        }

        fn after_run(&mut self, _model: &mut Model) {
            *self.after_run_calls.borrow_mut() += 1;
        }
    }

    /// Engine whose records never match the schema fixed at init.
    struct WrongSchemaEngine;

    impl Engine for WrongSchemaEngine {
        fn initialize(&mut self, _model: &mut Model) {}

        fn step(&mut self, _model: &mut Model, steps: u64) -> Vec<ResultRecord> {
            (0..steps).map(|_| record(&[("X", 1.0)])).collect()
        }
    }

    fn test_model(iterations: f64, updates: f64, interval: f64) -> Model {
        let mut model = Model::new("test");
        model.compartments.push("S", 10.0);
        model.compartments.push("I", 2.0);
        model.parameters.push("iterations", iterations);
        model.parameters.push("updates", updates);
        model.parameters.push("interval", interval);
        model
    }

    fn test_app_state(model: Model, engine: Box<dyn Engine>) -> AppState {
        AppState {
            model,
            engine,
            example: "test".to_string(),
            run: RunState::new(),
            table: TableState::new(),
            chart: ChartState::new(),
            population: PopulationState::new(),
            inspector: None,
            status: None,
        }
    }

    // ------------------------------------------------------------------
    // Results table
    // ------------------------------------------------------------------

    #[test]
    fn test_table_header_and_row_zero() {
        let mut table = TableState::new();
        table.init(&record(&[("S", 10.0), ("I", 2.0)]), 2);

        assert_eq!(table.columns, ["#", "S", "I"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], ["0", "10.00", "2.00"]);
    }

    #[test]
    fn test_table_rounds_to_decimals() {
        let mut table = TableState::new();
        table.init(&record(&[("S", 11.0), ("I", 0.0)]), 2);
        table.push_result(1, &record(&[("S", 10.456), ("I", 2.1)]));

        assert_eq!(table.rows[1], ["1", "10.46", "2.10"]);
    }

    #[test]
    fn test_table_decimals_configurable() {
        let mut table = TableState::new();
        table.init(&record(&[("S", 1.23456)]), 4);
        assert_eq!(table.rows[0], ["0", "1.2346"]);
    }

    // ------------------------------------------------------------------
    // Chart
    // ------------------------------------------------------------------

    #[test]
    fn test_chart_init_builds_one_series_per_key() {
        let mut chart = ChartState::new();
        chart.init(&record(&[("S", 10.0), ("I", 2.0), ("R", 0.0)]), 100, THREE_COLORS);

        assert_eq!(chart.series.len(), 3);
        assert_eq!(chart.series[0].label, "S");
        assert_eq!(chart.series[0].color, THREE_COLORS[0]);
        assert_eq!(chart.series[2].color, THREE_COLORS[2]);
        assert_eq!(chart.series[0].points, [10.0]);
        assert_eq!(chart.total_iterations, 100);
    }

    #[test]
    fn test_chart_reinit_never_accumulates() {
        let mut chart = ChartState::new();
        let initial = record(&[("S", 10.0), ("I", 2.0)]);

        chart.init(&initial, 100, THREE_COLORS);
        chart.push_record(&record(&[("S", 9.0), ("I", 3.0)]));
        let first_generation = chart.generation;

        chart.init(&initial, 100, THREE_COLORS);
        assert_ne!(chart.generation, first_generation);
        assert_eq!(chart.series.len(), 2);
        for series in &chart.series {
            assert_eq!(series.points.len(), 1, "stale points survived re-init");
        }
    }

    #[test]
    fn test_chart_schema_check() {
        let mut chart = ChartState::new();
        chart.init(&record(&[("S", 10.0), ("I", 2.0)]), 100, THREE_COLORS);

        assert!(chart.check_schema(&record(&[("S", 9.0), ("I", 3.0)])).is_ok());
        assert!(chart.check_schema(&record(&[("I", 3.0), ("S", 9.0)])).is_err());
        assert!(chart.check_schema(&record(&[("S", 9.0)])).is_err());
    }

    // ------------------------------------------------------------------
    // Population layout
    // ------------------------------------------------------------------

    #[test]
    fn test_aggregate_layout_colors_in_population_order() {
        let comps = compartments(&[("S", 2.0), ("I", 1.0)]);
        let circles = layout_aggregate(vec2(200.0, 100.0), &comps, THREE_COLORS.len());

        assert_eq!(circles.len(), 3);
        assert_eq!(circles[0].color, 0);
        assert_eq!(circles[1].color, 0);
        assert_eq!(circles[2].color, 1);
    }

    #[test]
    fn test_aggregate_layout_consumes_total_population() {
        let comps = compartments(&[("S", 30.0), ("I", 12.0), ("R", 8.0)]);
        let circles = layout_aggregate(vec2(300.0, 200.0), &comps, 3);

        assert_eq!(circles.len(), comps.total() as usize);
        for circle in &circles {
            assert!(circle.center.x.is_finite());
            assert!(circle.center.y.is_finite());
            assert!(circle.radius.is_finite() && circle.radius > 0.0);
        }
    }

    #[test]
    fn test_aggregate_layout_guards_zero_inputs() {
        let comps = compartments(&[("S", 0.0), ("I", 0.0)]);
        assert!(layout_aggregate(vec2(200.0, 100.0), &comps, 3).is_empty());

        let comps = compartments(&[("S", 10.0)]);
        assert!(layout_aggregate(vec2(0.0, 100.0), &comps, 3).is_empty());
        assert!(layout_aggregate(vec2(200.0, 0.0), &comps, 3).is_empty());
        assert!(layout_aggregate(vec2(200.0, 100.0), &comps, 0).is_empty());
    }

    #[test]
    fn test_agent_layout_scales_positions() {
        let world = AgentWorld::new(100.0, 50.0, 2.0);
        let agents = vec![Agent::new(1, 50.0, 25.0, "S")];
        let dots = layout_agents(vec2(200.0, 100.0), &agents, &world);

        assert_eq!(dots.len(), 1);
        assert_eq!(dots[0].center, pos2(100.0, 50.0));
        assert_eq!(dots[0].bounds.width(), 4.0);
        assert!(dots[0].bounds.contains(pos2(100.0, 50.0)));
    }

    #[test]
    fn test_agent_layout_guards_zero_world() {
        let world = AgentWorld::new(0.0, 50.0, 2.0);
        let agents = vec![Agent::new(1, 10.0, 10.0, "S")];
        assert!(layout_agents(vec2(200.0, 100.0), &agents, &world).is_empty());
    }

    #[test]
    fn test_hit_test_first_match_wins() {
        let world = AgentWorld::new(100.0, 100.0, 5.0);
        // Two agents at the same spot: the earlier one is reported
        let agents = vec![
            Agent::new(1, 50.0, 50.0, "S"),
            Agent::new(2, 50.0, 50.0, "I"),
        ];
        let dots = layout_agents(vec2(100.0, 100.0), &agents, &world);

        let hit = hit_test(&dots, pos2(50.0, 50.0)).expect("hit");
        assert_eq!(hit.id, 1);

        assert!(hit_test(&dots, pos2(90.0, 90.0)).is_none());
    }

    // ------------------------------------------------------------------
    // Run loop
    // ------------------------------------------------------------------

    #[test]
    fn test_run_performs_exact_chunks() {
        let (engine, chunks, _) = ScriptedEngine::new();
        let mut state = test_app_state(test_model(100.0, 10.0, 0.0), Box::new(engine));

        state.start_run(0.0);
        assert!(state.is_running());

        let mut now = 0.0;
        while state.is_running() {
            state.tick_if_due(now);
            now += 1.0;
        }

        assert_eq!(*chunks.borrow(), vec![10; 10]);
        assert_eq!(state.run.cursor, 100);
        assert_eq!(state.run.phase, RunPhase::Finished);
        // Row zero plus one row per step
        assert_eq!(state.table.rows.len(), 101);
        assert_eq!(state.chart.series[0].points.len(), 101);
    }

    #[test]
    fn test_run_ceiling_chunking_terminates_exactly() {
        let (engine, chunks, _) = ScriptedEngine::new();
        let mut state = test_app_state(test_model(10.0, 3.0, 0.0), Box::new(engine));

        state.start_run(0.0);
        let mut now = 0.0;
        while state.is_running() {
            state.tick_if_due(now);
            now += 1.0;
        }

        // ceil(10 / 3) = 4, last chunk clamped to the remainder
        assert_eq!(*chunks.borrow(), vec![4, 4, 2]);
        assert_eq!(state.run.cursor, 10);
    }

    #[test]
    fn test_stop_never_truncates_a_chunk() {
        let (engine, chunks, after_runs) = ScriptedEngine::new();
        let mut state = test_app_state(test_model(100.0, 10.0, 0.0), Box::new(engine));

        state.start_run(0.0);
        state.tick_if_due(1.0);
        assert_eq!(state.run.cursor, 10);

        state.run.request_stop();
        state.tick_if_due(2.0);

        // The chunk in flight was fully stepped and rendered
        assert_eq!(*chunks.borrow(), vec![10, 10]);
        assert_eq!(state.run.cursor, 20);
        assert_eq!(state.run.phase, RunPhase::Stopped);
        assert_eq!(state.table.rows.len(), 21);
        assert_eq!(*after_runs.borrow(), 1);

        // No further stepping once stopped
        state.tick_if_due(3.0);
        assert_eq!(state.run.cursor, 20);
    }

    #[test]
    fn test_interval_gates_chunks() {
        let (engine, chunks, _) = ScriptedEngine::new();
        // 40ms between updates
        let mut state = test_app_state(test_model(100.0, 10.0, 40.0), Box::new(engine));

        state.start_run(0.0);
        state.tick_if_due(0.01);
        assert!(chunks.borrow().is_empty(), "chunk ran before the interval");

        state.tick_if_due(0.05);
        assert_eq!(chunks.borrow().len(), 1);

        // Re-armed from the last chunk
        state.tick_if_due(0.06);
        assert_eq!(chunks.borrow().len(), 1);
        state.tick_if_due(0.1);
        assert_eq!(chunks.borrow().len(), 2);
    }

    #[test]
    fn test_invalid_model_fails_fast() {
        let (engine, _, _) = ScriptedEngine::new();
        let mut state = test_app_state(Model::new("empty"), Box::new(engine));

        state.start_run(0.0);
        assert_eq!(state.run.phase, RunPhase::Idle);
        assert!(state.status.is_some());
        assert!(state.table.is_empty());
    }

    #[test]
    fn test_mismatched_records_are_skipped_not_fatal() {
        let mut state = test_app_state(test_model(10.0, 2.0, 0.0), Box::new(WrongSchemaEngine));

        state.start_run(0.0);
        let mut now = 0.0;
        while state.is_running() {
            state.tick_if_due(now);
            now += 1.0;
        }

        // The run completed; only the initial row survived
        assert_eq!(state.run.phase, RunPhase::Finished);
        assert_eq!(state.run.cursor, 10);
        assert_eq!(state.table.rows.len(), 1);
        assert_eq!(state.chart.series[0].points.len(), 1);
    }

    #[test]
    fn test_restart_uses_fresh_template_clone() {
        let (engine, _, _) = ScriptedEngine::new();
        let mut state = test_app_state(test_model(10.0, 2.0, 0.0), Box::new(engine));

        state.start_run(0.0);
        if let Some(working) = state.run.working.as_mut() {
            working.compartments.set("S", 0.0);
        }
        let mut now = 0.0;
        while state.is_running() {
            state.tick_if_due(now);
            now += 1.0;
        }

        // Template untouched by the run's mutations
        assert_eq!(state.model.compartments.get("S"), Some(10.0));

        state.start_run(100.0);
        assert_eq!(
            state.run.working.as_ref().unwrap().compartments.get("S"),
            Some(10.0)
        );
    }

    #[test]
    fn test_population_refresh_snapshots_working_model() {
        let (engine, _, _) = ScriptedEngine::new();
        let mut model = test_model(10.0, 2.0, 0.0);
        model.population = Population::AgentBased {
            agents: vec![Agent::new(1, 5.0, 5.0, "S")],
            world: AgentWorld::new(10.0, 10.0, 2.0),
        };
        let mut state = test_app_state(model, Box::new(engine));

        state.start_run(0.0);
        match &state.population.snapshot {
            Some(PopulationSnapshot::Agents { agents, .. }) => assert_eq!(agents.len(), 1),
            other => panic!("unexpected snapshot: {other:?}"),
        }
        assert_eq!(state.population.palette.len(), 3);
    }
}
