use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A single repository with one commit on `main`.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());
    temp_dir
}

/// A bare "remote", a seed clone used to publish upstream changes, and the
/// working clone the code under test operates on.
///
/// Every branch passed to [`RemoteFixture::new`] exists on the remote only;
/// the working clone starts on `main`.
pub(crate) struct RemoteFixture {
    dir: TempDir,
    remote: PathBuf,
    seed: PathBuf,
    work: PathBuf,
}

impl RemoteFixture {
    pub(crate) fn new(branches: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        let remote = dir.path().join("remote.git");
        let seed = dir.path().join("seed");
        let work = dir.path().join("work");

        git(dir.path(), &["init", "--bare", "remote.git"]);
        git(&remote, &["symbolic-ref", "HEAD", "refs/heads/main"]);

        std::fs::create_dir_all(&seed).unwrap();
        init_repo(&seed);
        for branch in branches {
            git(&seed, &["branch", branch]);
        }
        git(&seed, &["remote", "add", "origin", &remote.to_string_lossy()]);
        git(&seed, &["push", "origin", "--all"]);

        git(dir.path(), &["clone", &remote.to_string_lossy(), "work"]);
        configure_user(&work);

        Self {
            dir,
            remote,
            seed,
            work,
        }
    }

    pub(crate) fn remote(&self) -> &Path {
        &self.remote
    }

    pub(crate) fn work(&self) -> &Path {
        &self.work
    }

    /// Add a second bare remote `name` holding `branches` (each at the seed's
    /// `main`), known to the working clone and fetched.
    pub(crate) fn add_remote(&self, name: &str, branches: &[&str]) {
        let bare = format!("{}.git", name);
        let path = self.dir.path().join(&bare);
        git(self.dir.path(), &["init", "--bare", &bare]);
        git(&self.seed, &["remote", "add", name, &path.to_string_lossy()]);
        for branch in branches {
            git(&self.seed, &["push", name, &format!("main:refs/heads/{}", branch)]);
        }
        git(&self.work, &["remote", "add", name, &path.to_string_lossy()]);
        git(&self.work, &["fetch", name]);
    }

    /// Commit a new file on `branch` in the seed clone and push it.
    pub(crate) fn commit_upstream(&self, branch: &str, file: &str, message: &str) {
        git(&self.seed, &["switch", branch]);
        std::fs::write(self.seed.join(file), format!("{}\n", message)).unwrap();
        git(&self.seed, &["add", "."]);
        git(&self.seed, &["commit", "-m", message]);
        git(&self.seed, &["push", "origin", branch]);
    }

    /// Commit a new file on the working clone's current branch, without pushing.
    pub(crate) fn commit_local(&self, file: &str, message: &str) {
        std::fs::write(self.work.join(file), format!("{}\n", message)).unwrap();
        git(&self.work, &["add", "."]);
        git(&self.work, &["commit", "-m", message]);
    }
}

fn init_repo(path: &Path) {
    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    configure_user(path);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
}

fn configure_user(path: &Path) {
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
}

/// Run git, panicking on failure, and return trimmed stdout.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
