//! Suite driver: every scenario, once per configured runtime, in order.

use std::path::Path;

use crate::executor::{Execute, ExecutionError};
use crate::invocation::Invocation;
use crate::printer::Printer;
use crate::runtime::RuntimeDescriptor;
use crate::scenario::Scenario;

/// Run one scenario under each runtime in the supplied order. Each runtime's
/// output is reported on its own; nothing is compared across runtimes. The
/// first failing invocation aborts the scenario (and with it the suite).
pub fn run_scenario(
    executor: &dyn Execute,
    printer: &Printer,
    scenario: &Scenario,
    runtimes: &[RuntimeDescriptor],
    cwd: &Path,
) -> Result<(), ExecutionError> {
    printer.banner(&scenario.heading());
    for runtime in runtimes {
        let invocation = Invocation::assemble(runtime, &scenario.artifact, &scenario.args, cwd);
        let stdout = executor.execute(&invocation)?;
        printer.section(&runtime.label, &stdout);
    }
    Ok(())
}

/// Run all scenarios in sequence against one shared working directory.
/// Strictly linear: no retry, no continue-on-error.
pub fn run_suite(
    executor: &dyn Execute,
    printer: &Printer,
    scenarios: &[Scenario],
    runtimes: &[RuntimeDescriptor],
    cwd: &Path,
) -> Result<(), ExecutionError> {
    for scenario in scenarios {
        run_scenario(executor, printer, scenario, runtimes, cwd)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;

    /// Records every invocation and fails the nth call when asked.
    struct ScriptedExecutor {
        calls: RefCell<Vec<Invocation>>,
        fail_on_call: Option<usize>,
    }

    impl ScriptedExecutor {
        fn ok() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on_call: None,
            }
        }

        fn failing_at(index: usize) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on_call: Some(index),
            }
        }
    }

    impl Execute for ScriptedExecutor {
        fn execute(&self, invocation: &Invocation) -> Result<String, ExecutionError> {
            let index = self.calls.borrow().len();
            self.calls.borrow_mut().push(invocation.clone());
            if self.fail_on_call == Some(index) {
                return Err(ExecutionError::Spawn {
                    command: invocation.command_line(),
                    source: io::Error::new(io::ErrorKind::NotFound, "missing runtime"),
                });
            }
            Ok(format!("output {}\n", index))
        }
    }

    fn runtimes() -> Vec<RuntimeDescriptor> {
        vec![
            RuntimeDescriptor::new("IWASM", "iwasm", vec!["--dir=.".to_string()]),
            RuntimeDescriptor::new("WASMEDGE", "wasmedge", vec!["--dir=.".to_string()]),
        ]
    }

    fn scenario(name: &str) -> Scenario {
        Scenario {
            name: name.to_string(),
            title: None,
            artifact: format!("./{}.wasm", name),
            args: Vec::new(),
        }
    }

    #[test]
    fn scenario_runs_once_per_runtime_in_order() {
        let executor = ScriptedExecutor::ok();
        let cwd = PathBuf::from("/work");
        run_scenario(
            &executor,
            &Printer::plain(),
            &scenario("triangle"),
            &runtimes(),
            &cwd,
        )
        .unwrap();

        let calls = executor.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].program, "iwasm");
        assert_eq!(calls[1].program, "wasmedge");
        assert!(calls.iter().all(|c| c.cwd == cwd));
        assert!(calls.iter().all(|c| c.args.contains(&"./triangle.wasm".to_string())));
    }

    #[test]
    fn first_runtime_failure_stops_the_scenario() {
        let executor = ScriptedExecutor::failing_at(0);
        let err = run_scenario(
            &executor,
            &Printer::plain(),
            &scenario("triangle"),
            &runtimes(),
            Path::new("."),
        )
        .unwrap_err();

        assert!(matches!(err, ExecutionError::Spawn { .. }));
        // The second runtime was never invoked.
        assert_eq!(executor.calls.borrow().len(), 1);
    }

    #[test]
    fn suite_runs_scenarios_sequentially() {
        let executor = ScriptedExecutor::ok();
        let scenarios = vec![scenario("triangle"), scenario("compute")];
        run_suite(
            &executor,
            &Printer::plain(),
            &scenarios,
            &runtimes(),
            Path::new("."),
        )
        .unwrap();

        let calls = executor.calls.borrow();
        assert_eq!(calls.len(), 4);
        assert!(calls[0].args.contains(&"./triangle.wasm".to_string()));
        assert!(calls[3].args.contains(&"./compute.wasm".to_string()));
    }

    #[test]
    fn failure_in_one_scenario_stops_the_rest() {
        // Second runtime of the first scenario fails; the compute scenario
        // must never start.
        let executor = ScriptedExecutor::failing_at(1);
        let scenarios = vec![scenario("triangle"), scenario("compute")];
        let err = run_suite(
            &executor,
            &Printer::plain(),
            &scenarios,
            &runtimes(),
            Path::new("."),
        )
        .unwrap_err();

        assert!(matches!(err, ExecutionError::Spawn { .. }));
        let calls = executor.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls
            .iter()
            .all(|c| c.args.contains(&"./triangle.wasm".to_string())));
    }
}
