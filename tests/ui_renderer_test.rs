use droplist::config::Config;
use droplist::ui::core::{Component, EventHandler};
use droplist::ui::AppComponent;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn symbol(buffer: &Buffer, x: u16, y: u16) -> &str {
    let index = y as usize * buffer.area.width as usize + x as usize;
    buffer.content[index].symbol()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width).map(|x| symbol(buffer, x, y)).collect()
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut AppComponent) -> Buffer {
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal.backend().buffer().clone()
}

fn setup() -> (Terminal<TestBackend>, AppComponent) {
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app = AppComponent::new(&Config::default());
    (terminal, app)
}

#[test]
fn test_initial_render_hides_both_lists() {
    let (mut terminal, mut app) = setup();
    let buffer = draw(&mut terminal, &mut app);

    // Tracking widget at (8, 2): fully rounded closed frame
    assert_eq!(symbol(&buffer, 8, 2), "╭");
    assert_eq!(symbol(&buffer, 31, 2), "╮");
    assert_eq!(symbol(&buffer, 8, 4), "╰");
    assert_eq!(symbol(&buffer, 31, 4), "╯");

    // No items anywhere below either closed button
    for y in 5..11 {
        assert!(!row_text(&buffer, y).contains("Item"));
    }

    // Tracking label is empty before the first pick; the toggle-only
    // button carries its static label
    assert!(!row_text(&buffer, 3).contains("Item"));
    assert!(row_text(&buffer, 3).contains("Select an item"));
    assert!(row_text(&buffer, 3).contains("▾"));
}

#[test]
fn test_open_render_shows_the_list_with_square_button_bottom() {
    let (mut terminal, mut app) = setup();
    app.handle_mouse_event(click(10, 3));
    let buffer = draw(&mut terminal, &mut app);

    // Top corners stay rounded
    assert_eq!(symbol(&buffer, 8, 2), "╭");
    assert_eq!(symbol(&buffer, 31, 2), "╮");

    // The button has no bottom border: its sides run straight through
    // the separator row into the list frame
    assert_eq!(symbol(&buffer, 8, 3), "│");
    assert_eq!(symbol(&buffer, 8, 4), "│");
    assert_eq!(symbol(&buffer, 9, 4), "─"); // separator rule, not a border

    // The list closes the frame with rounded bottom corners
    assert_eq!(symbol(&buffer, 8, 10), "╰");
    assert_eq!(symbol(&buffer, 31, 10), "╯");

    // All five items are visible
    assert!(row_text(&buffer, 5).contains("Item1"));
    assert!(row_text(&buffer, 6).contains("Item2"));
    assert!(row_text(&buffer, 7).contains("Item3"));
    assert!(row_text(&buffer, 8).contains("Item4"));
    assert!(row_text(&buffer, 9).contains("Item5"));

    // Open indicator replaces the closed one on the button row
    assert!(row_text(&buffer, 3).contains("▴"));
}

#[test]
fn test_render_after_pick_echoes_the_selection_and_hides_the_list() {
    let (mut terminal, mut app) = setup();
    app.handle_mouse_event(click(10, 3));
    app.handle_mouse_event(click(10, 6)); // Item2
    let buffer = draw(&mut terminal, &mut app);

    assert!(row_text(&buffer, 3).contains("Item2"));
    assert_eq!(symbol(&buffer, 8, 4), "╰"); // closed frame again
    for y in 5..11 {
        assert!(!row_text(&buffer, y).contains("Item"));
    }

    // The status bar echoes the pick
    assert!(row_text(&buffer, 23).contains("Item2"));
}

#[test]
fn test_toggle_only_render_reopens_and_recloses() {
    let (mut terminal, mut app) = setup();
    app.handle_mouse_event(click(50, 3));
    let buffer = draw(&mut terminal, &mut app);

    // Toggle-only widget at (48, 2): open frame with items
    assert_eq!(symbol(&buffer, 48, 10), "╰");
    assert!(row_text(&buffer, 5).contains("Item1"));

    app.handle_mouse_event(click(50, 3));
    let buffer = draw(&mut terminal, &mut app);
    assert_eq!(symbol(&buffer, 48, 4), "╰");
    assert!(!row_text(&buffer, 5).contains("Item1"));
}

#[tokio::test]
async fn test_event_handler_frame_timing() {
    let event_handler = EventHandler::new();

    // Initially should not need to render (just created)
    assert!(!event_handler.should_render());

    // After waiting, should be ready to render
    tokio::time::sleep(tokio::time::Duration::from_millis(17)).await;
    assert!(event_handler.should_render());
}

#[tokio::test]
async fn test_event_handler_marks_renders() {
    let mut event_handler = EventHandler::new();
    tokio::time::sleep(tokio::time::Duration::from_millis(17)).await;
    assert!(event_handler.should_render());

    event_handler.mark_rendered();
    assert!(!event_handler.should_render());
}
