//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use git2::{Oid, Repository, RepositoryInitOptions, Signature, Time};

use prdraft::error::{GhError, WizardError};
use prdraft::gh::GhExecutor;
use prdraft::wizard::Prompter;

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory, HEAD on `main`.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("main");
        let repo = Repository::init_opts(dir.path(), &opts).expect("Failed to init git repo");
        Self { dir, repo }
    }

    /// Create a commit on HEAD at the given unix time. Returns the commit OID.
    pub fn commit_at(&self, message: &str, seconds: i64) -> Oid {
        self.commit_with_times(message, seconds, seconds)
    }

    /// Create a commit on HEAD with distinct author and committer times.
    pub fn commit_with_times(&self, message: &str, authored: i64, committed: i64) -> Oid {
        let author = Signature::new("Test User", "test@example.com", &Time::new(authored, 0))
            .expect("Failed to create author signature");
        let committer = Signature::new("Test User", "test@example.com", &Time::new(committed, 0))
            .expect("Failed to create committer signature");

        let file_path = self.dir.path().join("test.txt");
        std::fs::write(&file_path, format!("{message}\n{committed}")).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(std::path::Path::new("test.txt")).expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &author, &committer, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a branch pointing to the given OID.
    pub fn branch(&self, name: &str, oid: Oid) {
        let commit = self.repo.find_commit(oid).expect("Failed to find commit");
        self.repo.branch(name, &commit, true).expect("Failed to create branch");
    }

    /// Add a remote with the given URL.
    pub fn remote(&self, name: &str, url: &str) {
        self.repo.remote(name, url).expect("Failed to add remote");
    }
}

/// gh executor answering from canned responses keyed by argument prefix.
///
/// Every call is recorded so tests can assert the exact command lines.
pub struct FakeGhExecutor {
    responses: Vec<(Vec<String>, Result<String, String>)>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeGhExecutor {
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Respond with `stdout` to any call whose arguments start with `prefix`.
    pub fn on(mut self, prefix: &[&str], stdout: &str) -> Self {
        self.responses
            .push((prefix.iter().map(|s| s.to_string()).collect(), Ok(stdout.to_string())));
        self
    }

    /// Fail with a non-zero exit for calls starting with `prefix`.
    pub fn fail(mut self, prefix: &[&str], stderr: &str) -> Self {
        self.responses
            .push((prefix.iter().map(|s| s.to_string()).collect(), Err(stderr.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// The recorded call starting with `prefix`, if any.
    pub fn call_starting_with(&self, prefix: &[&str]) -> Option<Vec<String>> {
        self.calls()
            .into_iter()
            .find(|call| call.len() >= prefix.len() && call.iter().zip(prefix).all(|(a, b)| a == b))
    }
}

#[async_trait]
impl GhExecutor for FakeGhExecutor {
    async fn run(&self, args: Vec<String>) -> Result<String, GhError> {
        self.calls.lock().unwrap().push(args.clone());

        let response = self
            .responses
            .iter()
            .find(|(prefix, _)| args.len() >= prefix.len() && args.iter().zip(prefix).all(|(a, b)| a == b))
            .map(|(_, response)| response.clone());

        match response {
            Some(Ok(stdout)) => Ok(stdout),
            Some(Err(stderr)) => Err(GhError::NonZeroExit { code: 1, stderr }),
            None => Err(GhError::NonZeroExit {
                code: 1,
                stderr: format!("unexpected gh call: {}", args.join(" ")),
            }),
        }
    }
}

/// One scripted answer for [`ScriptedPrompter`].
#[derive(Debug, Clone)]
pub enum Answer {
    Select(usize),
    MultiSelect(Vec<usize>),
    Input(String),
    /// `None` keeps the pre-filled body.
    Edit(Option<String>),
    Confirm(bool),
    Cancel,
}

/// Prompter that replays answers in order and records the prompts and items shown.
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    pub shown: RefCell<Vec<(String, Vec<String>)>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            shown: RefCell::new(Vec::new()),
        }
    }

    /// Items shown for the prompt with the given text.
    pub fn items_for(&self, prompt: &str) -> Option<Vec<String>> {
        self.shown
            .borrow()
            .iter()
            .find(|(p, _)| p == prompt)
            .map(|(_, items)| items.clone())
    }

    fn next(&self, prompt: &str, items: &[String]) -> Answer {
        self.shown.borrow_mut().push((prompt.to_string(), items.to_vec()));
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("No scripted answer for prompt '{prompt}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, items: &[String], _default: usize) -> Result<Option<usize>, WizardError> {
        match self.next(prompt, items) {
            Answer::Select(i) => Ok(Some(i)),
            Answer::Cancel => Ok(None),
            other => panic!("Expected select answer for '{prompt}', got {other:?}"),
        }
    }

    fn multi_select(&self, prompt: &str, items: &[String]) -> Result<Option<Vec<usize>>, WizardError> {
        match self.next(prompt, items) {
            Answer::MultiSelect(picked) => Ok(Some(picked)),
            Answer::Cancel => Ok(None),
            other => panic!("Expected multi-select answer for '{prompt}', got {other:?}"),
        }
    }

    fn input(&self, prompt: &str, initial: &str) -> Result<String, WizardError> {
        match self.next(prompt, &[initial.to_string()]) {
            Answer::Input(text) => Ok(text),
            other => panic!("Expected input answer for '{prompt}', got {other:?}"),
        }
    }

    fn edit(&self, prompt: &str, initial: &str) -> Result<Option<String>, WizardError> {
        match self.next(prompt, &[initial.to_string()]) {
            Answer::Edit(text) => Ok(text),
            other => panic!("Expected edit answer for '{prompt}', got {other:?}"),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<Option<bool>, WizardError> {
        match self.next(prompt, &[]) {
            Answer::Confirm(yes) => Ok(Some(yes)),
            Answer::Cancel => Ok(None),
            other => panic!("Expected confirm answer for '{prompt}', got {other:?}"),
        }
    }
}
