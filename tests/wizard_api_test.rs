//! Integration tests for the wizard engine public API.

use dockhand::wizard::{
    ExecuteStep, FnExecuteStep, FnPromptStep, Phase, PromptStep, Wizard, WizardError, WizardState,
};
use dockhand::DockhandError;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Answers {
    name: Option<String>,
    log: Vec<String>,
}

/// A step type with its own identity, the way real wizards declare steps.
struct RecordStep {
    id: &'static str,
    priority: i32,
}

impl ExecuteStep<Answers> for RecordStep {
    fn id(&self) -> &str {
        self.id
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn execute(&self, context: &mut Answers) -> dockhand::Result<()> {
        context.log.push(self.id.to_string());
        Ok(())
    }
}

struct AskName;

impl PromptStep<Answers> for AskName {
    fn id(&self) -> &str {
        "ask-name"
    }

    fn should_prompt(&self, context: &Answers) -> bool {
        context.name.is_none()
    }

    fn prompt(&self, context: &mut Answers) -> dockhand::Result<()> {
        context.name = Some("asked".to_string());
        context.log.push("ask-name".to_string());
        Ok(())
    }
}

#[test]
fn prompt_steps_run_before_execute_steps() {
    let mut wizard: Wizard<Answers> = Wizard::builder(Answers::default())
        .execute_step(RecordStep {
            id: "write",
            priority: 100,
        })
        .prompt_step(AskName)
        .build();

    wizard.run().unwrap();

    assert_eq!(wizard.state(), WizardState::Done);
    assert_eq!(wizard.context().log, vec!["ask-name", "write"]);
}

#[test]
fn answered_prompt_is_skipped() {
    let answers = Answers {
        name: Some("given".to_string()),
        ..Default::default()
    };
    let mut wizard: Wizard<Answers> = Wizard::builder(answers).prompt_step(AskName).build();

    wizard.run().unwrap();

    let answers = wizard.into_context();
    assert_eq!(answers.name.as_deref(), Some("given"));
    assert!(answers.log.is_empty());
}

#[test]
fn execute_steps_run_by_priority_with_stable_ties() {
    let mut wizard: Wizard<Answers> = Wizard::builder(Answers::default())
        .execute_step(RecordStep {
            id: "late",
            priority: 300,
        })
        .execute_step(RecordStep {
            id: "tie-first",
            priority: 100,
        })
        .execute_step(RecordStep {
            id: "early",
            priority: -5,
        })
        .execute_step(RecordStep {
            id: "tie-second",
            priority: 100,
        })
        .build();

    wizard.execute().unwrap();

    assert_eq!(
        wizard.context().log,
        vec!["early", "tie-first", "tie-second", "late"]
    );
}

#[test]
fn execute_failure_keeps_earlier_effects() {
    let mut wizard: Wizard<Answers> = Wizard::builder(Answers::default())
        .execute_step(RecordStep {
            id: "a",
            priority: 100,
        })
        .execute_step(FnExecuteStep::new("b", 200, |_: &mut Answers| {
            Err(DockhandError::StepFailed {
                step: "b".to_string(),
                message: "disk full".to_string(),
            })
        }))
        .execute_step(RecordStep {
            id: "c",
            priority: 300,
        })
        .build();

    let err = wizard.run().unwrap_err();

    assert!(err.to_string().contains("disk full"));
    assert_eq!(
        wizard.state(),
        WizardState::Failed {
            phase: Phase::Execute
        }
    );
    assert_eq!(wizard.failed_step(), Some("b"));
    assert_eq!(wizard.context().log, vec!["a"]);
}

#[test]
fn cancelled_prompt_stops_before_execute() {
    let executed = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&executed);

    let mut wizard: Wizard<Answers> = Wizard::builder(Answers::default())
        .prompt_step(FnPromptStep::new("ask", |_: &mut Answers| {
            Err(DockhandError::Cancelled)
        }))
        .execute_step(FnExecuteStep::new("write", 100, move |_: &mut Answers| {
            *flag.borrow_mut() = true;
            Ok(())
        }))
        .build();

    let err = wizard.run().unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(
        wizard.state(),
        WizardState::Failed {
            phase: Phase::Prompt
        }
    );
    assert!(!*executed.borrow());
}

#[test]
fn finished_wizard_cannot_run_again() {
    let mut wizard: Wizard<Answers> = Wizard::builder(Answers::default())
        .execute_step(RecordStep {
            id: "once",
            priority: 0,
        })
        .build();

    wizard.run().unwrap();
    let err = wizard.run().unwrap_err();

    assert!(matches!(
        err,
        DockhandError::Wizard(WizardError::InvalidTransition { .. })
    ));
    assert_eq!(wizard.context().log, vec!["once"]);
}

#[test]
fn empty_wizard_completes() {
    let mut wizard: Wizard<Answers> = Wizard::builder(Answers::default())
        .title("Nothing")
        .build();

    wizard.run().unwrap();

    assert_eq!(wizard.title(), Some("Nothing"));
    assert_eq!(wizard.prompt_step_count(), 0);
    assert_eq!(wizard.execute_step_count(), 0);
    assert_eq!(wizard.state(), WizardState::Done);
}

#[derive(Debug)]
enum AppError {
    Engine(WizardError),
    Refused,
}

impl From<WizardError> for AppError {
    fn from(e: WizardError) -> Self {
        AppError::Engine(e)
    }
}

#[test]
fn wizard_works_with_caller_error_type() {
    let mut wizard: Wizard<Vec<u8>, AppError> = Wizard::builder(Vec::new())
        .execute_step(FnExecuteStep::new("push", 1, |v: &mut Vec<u8>| {
            v.push(1);
            Ok(())
        }))
        .execute_step(FnExecuteStep::new("refuse", 2, |_: &mut Vec<u8>| {
            Err(AppError::Refused)
        }))
        .build();

    assert!(matches!(wizard.run(), Err(AppError::Refused)));
    assert!(matches!(wizard.prompt(), Err(AppError::Engine(_))));
    assert_eq!(wizard.into_context(), vec![1]);
}
