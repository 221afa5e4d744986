// Timing behavior of the code playground, driven by tokio's paused clock.

use codeteria::core::{
    Direction, PlaygroundController, PlaygroundEvent, RunStatus, Snippet, SnippetCatalog, Timing,
};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep, sleep_until, Instant};
use uuid::Uuid;

struct Widget {
    controller: PlaygroundController,
    events: UnboundedReceiver<PlaygroundEvent>,
    mounted_at: Instant,
}

impl Widget {
    fn mount(catalog: SnippetCatalog) -> Self {
        let mounted_at = Instant::now();
        let (controller, events) = PlaygroundController::mount(catalog, Timing::default());
        Self {
            controller,
            events,
            mounted_at,
        }
    }

    /// Delivers every timer event due up to `ms` after mount, like the app's event loop.
    async fn run_until(&mut self, ms: u64) {
        let deadline = sleep_until(self.mounted_at + Duration::from_millis(ms));
        tokio::pin!(deadline);
        loop {
            tokio::select! {
                biased;
                Some(event) = self.events.recv() => self.controller.handle(event),
                _ = &mut deadline => break,
            }
        }
    }
}

fn two_snippets() -> SnippetCatalog {
    SnippetCatalog::new(vec![
        Snippet::new("python", "print(fibonacci(10))", "55"),
        Snippet::new(
            "javascript",
            "console.log(quickSort([3, 6, 8, 10, 1, 2, 1]));",
            "[1,1,2,3,6,8,10]",
        ),
    ])
    .unwrap()
}

fn catalog_of(len: usize) -> SnippetCatalog {
    SnippetCatalog::new(
        (0..len)
            .map(|i| Snippet::new("text", format!("echo {i}"), i.to_string()))
            .collect(),
    )
    .unwrap()
}

#[tokio::test(start_paused = true)]
async fn mounts_idle_on_first_snippet() {
    let widget = Widget::mount(two_snippets());
    let playground = &widget.controller;

    assert_eq!(playground.current_index(), 0);
    assert_eq!(playground.run_status(), RunStatus::Idle);
    assert_eq!(playground.displayed_output(), None);
    assert_eq!(playground.current_snippet().language, "python");
}

#[tokio::test(start_paused = true)]
async fn next_cycles_back_to_start() {
    for len in 1..=5 {
        let mut widget = Widget::mount(catalog_of(len));
        for start in 0..len {
            assert_eq!(widget.controller.current_index(), start);
            for _ in 0..len {
                widget.controller.advance(Direction::Next);
            }
            assert_eq!(widget.controller.current_index(), start);
            widget.controller.advance(Direction::Next);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn previous_undoes_next() {
    let len = 4;
    let mut widget = Widget::mount(catalog_of(len));
    for _ in 0..len {
        let start = widget.controller.current_index();
        widget.controller.advance(Direction::Next);
        widget.controller.advance(Direction::Previous);
        assert_eq!(widget.controller.current_index(), start);

        widget.controller.advance(Direction::Previous);
        widget.controller.advance(Direction::Next);
        assert_eq!(widget.controller.current_index(), start);

        widget.controller.advance(Direction::Next);
    }
    widget.controller.advance(Direction::Previous);
    assert_eq!(widget.controller.current_index(), len - 1);
}

#[tokio::test(start_paused = true)]
async fn run_shows_output_after_delay() {
    let mut widget = Widget::mount(two_snippets());

    widget.controller.run_current();
    assert_eq!(widget.controller.run_status(), RunStatus::Running);
    assert_eq!(widget.controller.displayed_output(), None);

    widget.run_until(1499).await;
    assert_eq!(widget.controller.run_status(), RunStatus::Running);
    assert_eq!(widget.controller.displayed_output(), None);

    widget.run_until(1501).await;
    assert_eq!(widget.controller.displayed_output(), Some("55"));
    assert_eq!(widget.controller.run_status(), RunStatus::Idle);
    assert_eq!(widget.controller.current_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn navigation_during_run_discards_result() {
    let mut widget = Widget::mount(two_snippets());

    widget.controller.run_current();
    widget.run_until(500).await;
    widget.controller.advance(Direction::Next);
    assert_eq!(widget.controller.run_status(), RunStatus::Running);

    widget.run_until(1501).await;
    assert_eq!(widget.controller.displayed_output(), None);
    assert_eq!(widget.controller.run_status(), RunStatus::Idle);
    assert_eq!(widget.controller.current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn returning_to_the_same_snippet_still_discards_result() {
    let mut widget = Widget::mount(two_snippets());

    widget.controller.run_current();
    widget.run_until(300).await;
    widget.controller.advance(Direction::Next);
    widget.controller.advance(Direction::Previous);
    assert_eq!(widget.controller.current_index(), 0);

    widget.run_until(1501).await;
    assert_eq!(widget.controller.displayed_output(), None);
    assert_eq!(widget.controller.run_status(), RunStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn run_while_running_is_ignored() {
    let mut widget = Widget::mount(two_snippets());

    widget.controller.run_current();
    widget.run_until(1000).await;
    widget.controller.run_current();
    assert_eq!(widget.controller.run_status(), RunStatus::Running);
    assert_eq!(widget.controller.displayed_output(), None);

    // Completes on the first run's schedule, not 1500ms after the second call.
    widget.run_until(1501).await;
    assert_eq!(widget.controller.displayed_output(), Some("55"));
    assert_eq!(widget.controller.run_status(), RunStatus::Idle);

    widget.run_until(2600).await;
    assert_eq!(widget.controller.displayed_output(), Some("55"));
    assert_eq!(widget.controller.run_status(), RunStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn rerun_after_completion_starts_a_new_delay() {
    let mut widget = Widget::mount(two_snippets());

    widget.controller.run_current();
    widget.run_until(1501).await;
    widget.controller.run_current();
    assert_eq!(widget.controller.run_status(), RunStatus::Running);
    assert_eq!(widget.controller.displayed_output(), Some("55"));

    widget.run_until(2999).await;
    assert_eq!(widget.controller.run_status(), RunStatus::Running);
    widget.run_until(3002).await;
    assert_eq!(widget.controller.run_status(), RunStatus::Idle);
    assert_eq!(widget.controller.displayed_output(), Some("55"));
}

#[tokio::test(start_paused = true)]
async fn auto_advance_after_idle_interval() {
    let mut widget = Widget::mount(two_snippets());

    widget.run_until(4999).await;
    assert_eq!(widget.controller.current_index(), 0);

    widget.run_until(5001).await;
    assert_eq!(widget.controller.current_index(), 1);
    assert_eq!(widget.controller.displayed_output(), None);

    // The interval restarts from the automatic change too.
    widget.run_until(9999).await;
    assert_eq!(widget.controller.current_index(), 1);
    widget.run_until(10001).await;
    assert_eq!(widget.controller.current_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn manual_navigation_postpones_auto_advance() {
    let mut widget = Widget::mount(catalog_of(3));

    widget.run_until(4000).await;
    widget.controller.advance(Direction::Next);
    assert_eq!(widget.controller.current_index(), 1);

    widget.run_until(5001).await;
    assert_eq!(widget.controller.current_index(), 1);

    widget.run_until(8999).await;
    assert_eq!(widget.controller.current_index(), 1);

    widget.run_until(9001).await;
    assert_eq!(widget.controller.current_index(), 2);
}

#[tokio::test(start_paused = true)]
async fn auto_advance_clears_output() {
    let mut widget = Widget::mount(two_snippets());

    widget.run_until(1000).await;
    widget.controller.run_current();
    widget.run_until(2501).await;
    assert_eq!(widget.controller.displayed_output(), Some("55"));

    widget.run_until(5001).await;
    assert_eq!(widget.controller.current_index(), 1);
    assert_eq!(widget.controller.displayed_output(), None);
}

#[tokio::test(start_paused = true)]
async fn auto_advance_during_run_discards_result() {
    let mut widget = Widget::mount(two_snippets());

    widget.run_until(4000).await;
    widget.controller.run_current();

    widget.run_until(5001).await;
    assert_eq!(widget.controller.current_index(), 1);
    assert_eq!(widget.controller.run_status(), RunStatus::Running);

    widget.run_until(5501).await;
    assert_eq!(widget.controller.run_status(), RunStatus::Idle);
    assert_eq!(widget.controller.displayed_output(), None);
}

#[tokio::test(start_paused = true)]
async fn every_navigation_clears_output() {
    let mut widget = Widget::mount(two_snippets());

    for direction in [Direction::Next, Direction::Previous] {
        widget.controller.run_current();
        let due = widget.mounted_at.elapsed().as_millis() as u64 + 1501;
        widget.run_until(due).await;
        assert!(widget.controller.displayed_output().is_some());

        widget.controller.advance(direction);
        assert_eq!(widget.controller.displayed_output(), None);
    }
}

#[tokio::test(start_paused = true)]
async fn superseded_tick_is_ignored() {
    let mut widget = Widget::mount(two_snippets());

    // Generation 0 belongs to the timer armed at mount.
    widget.controller.advance(Direction::Next);
    widget
        .controller
        .handle(PlaygroundEvent::AutoAdvance { generation: 0 });
    assert_eq!(widget.controller.current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn unknown_run_completion_is_ignored() {
    let mut widget = Widget::mount(two_snippets());

    widget.controller.run_current();
    widget.controller.handle(PlaygroundEvent::RunFinished {
        run_id: Uuid::new_v4(),
    });
    assert_eq!(widget.controller.run_status(), RunStatus::Running);

    widget.run_until(1501).await;
    assert_eq!(widget.controller.displayed_output(), Some("55"));
}

#[tokio::test(start_paused = true)]
async fn teardown_stops_all_timers() {
    let Widget {
        mut controller,
        mut events,
        ..
    } = Widget::mount(two_snippets());

    controller.run_current();
    controller.teardown();

    sleep(Duration::from_secs(30)).await;
    assert!(events.try_recv().is_err());
    assert_eq!(events.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn widgets_are_independent() {
    let mut first = Widget::mount(two_snippets());
    let mut second = Widget::mount(two_snippets());

    first.controller.run_current();
    second.controller.advance(Direction::Next);

    first.run_until(1501).await;
    second.run_until(1501).await;
    assert_eq!(first.controller.displayed_output(), Some("55"));
    assert_eq!(first.controller.current_index(), 0);
    assert_eq!(second.controller.run_status(), RunStatus::Idle);
    assert_eq!(second.controller.current_index(), 1);
}
