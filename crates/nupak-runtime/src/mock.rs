use crate::runner::{CommandOutput, CommandRunner};
use crate::RuntimeError;
use std::collections::VecDeque;
use std::sync::Mutex;

type Effect = Box<dyn Fn() + Send + Sync>;

struct Scripted {
    output: CommandOutput,
    effect: Option<Effect>,
}

/// Scripted command runner for tests.
///
/// Responses are consumed in FIFO order and every invocation is recorded.
/// An exhausted script yields a clean empty success. A response may carry
/// an effect closure, run at invocation time, so tests can emulate a
/// command's filesystem side effects (a restore populating its cache).
#[derive(Default)]
pub struct MockRunner {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_success(&self, stdout: &str) {
        self.push(
            CommandOutput {
                exit_code: 0,
                stdout: stdout.to_owned(),
                stderr: String::new(),
            },
            None,
        );
    }

    pub fn push_failure(&self, exit_code: i32, output: &str) {
        self.push(
            CommandOutput {
                exit_code,
                stdout: output.to_owned(),
                stderr: String::new(),
            },
            None,
        );
    }

    pub fn push_with_effect(
        &self,
        output: CommandOutput,
        effect: impl Fn() + Send + Sync + 'static,
    ) {
        self.push(output, Some(Box::new(effect)));
    }

    /// Every `(program, args)` pair seen so far, in invocation order.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().expect("calls mutex").clone()
    }

    fn push(&self, output: CommandOutput, effect: Option<Effect>) {
        self.script
            .lock()
            .expect("script mutex")
            .push_back(Scripted { output, effect });
    }
}

impl CommandRunner for MockRunner {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, RuntimeError> {
        self.calls
            .lock()
            .map_err(|e| RuntimeError::ExecFailed(format!("mutex poisoned: {e}")))?
            .push((program.to_owned(), args.to_vec()));

        let next = self
            .script
            .lock()
            .map_err(|e| RuntimeError::ExecFailed(format!("mutex poisoned: {e}")))?
            .pop_front();

        match next {
            Some(scripted) => {
                if let Some(effect) = &scripted.effect {
                    effect();
                }
                Ok(scripted.output)
            }
            None => Ok(CommandOutput {
                exit_code: 0,
                stdout: String::new(),
                stderr: String::new(),
            }),
        }
    }
}
