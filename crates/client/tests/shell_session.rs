use stash_client::{CliConfig, Shell, ShellCommand, build_runtime};

fn config(save_dir: &std::path::Path) -> CliConfig {
    CliConfig {
        save_dir: Some(save_dir.to_path_buf()),
        session_id: Some("shell".into()),
        ..CliConfig::default()
    }
}

async fn run(shell: &Shell, line: &str) -> String {
    let command = ShellCommand::parse(line)
        .expect("well-formed line")
        .expect("non-blank line");
    shell.dispatch(command).await.expect("dispatch")
}

#[tokio::test]
async fn drags_render_feedback_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let runtime = build_runtime(&config(dir.path())).await.expect("runtime");
    let shell = Shell::new(runtime.handle());

    // Offer 0 is the Rusty Sword at 40 gold.
    assert_eq!(
        run(&shell, "drag store:0 inventory:3").await,
        "[success] purchase (gold: 110)"
    );
    assert_eq!(
        run(&shell, "drag inventory:1 head").await,
        "[failure] That does not go there."
    );
    assert_eq!(
        run(&shell, "drag inventory:0 store:1").await,
        "[silent] nothing happens (drop_on_store)"
    );
    assert!(run(&shell, "drag inventory:0 attic").await.starts_with("[silent]"));

    let shown = run(&shell, "show").await;
    let player: serde_json::Value = serde_json::from_str(&shown).expect("json dump");
    assert_eq!(player["gold"], 110);

    drop(shell);
    runtime.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn save_then_resume_in_a_new_runtime() {
    let dir = tempfile::tempdir().expect("tempdir");

    let runtime = build_runtime(&config(dir.path())).await.expect("runtime");
    let shell = Shell::new(runtime.handle());
    assert_eq!(run(&shell, "load").await, "nothing saved for this session");
    run(&shell, "drag inventory:0 sell").await;
    assert_eq!(run(&shell, "save").await, "saved");
    drop(shell);
    runtime.shutdown().await.expect("shutdown");

    let runtime = build_runtime(&config(dir.path())).await.expect("runtime");
    let player = runtime.handle().query_state().await.expect("query");
    // Hunting Bow sold for 15.
    assert_eq!(player.gold, 165);
    assert!(player.inventory.get(0).is_none());
    runtime.shutdown().await.expect("shutdown");
}
