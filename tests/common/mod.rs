#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use std::net::TcpListener;
use std::path::Path;
use tempfile::TempDir;

pub fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

/// A URL on localhost that nothing is listening on
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn commit_file(repo: &Repository, name: &str, contents: &str) -> Oid {
    let root = repo.workdir().unwrap();
    std::fs::write(root.join(name), contents).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

    let sig = Signature::now("Test", "test@example.com").unwrap();
    let parents: Vec<git2::Commit> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, "update", &tree, &parent_refs)
        .unwrap()
}

/// A repository with one commit containing `go.mod` for `module`
pub fn module_repo(module: &str) -> (TempDir, Oid) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let head = commit_file(&repo, "go.mod", &format!("module {module}\n\ngo 1.21\n"));
    (dir, head)
}

/// A repository with `go.mod` on disk but no commits
pub fn empty_module_repo(module: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    Repository::init(dir.path()).unwrap();
    std::fs::write(dir.path().join("go.mod"), format!("module {module}\n")).unwrap();
    dir
}
