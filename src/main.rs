//! Roster Shuffle entry point
//!
//! On the web this wires the page to the roster app and LocalStorage.
//! Natively it runs one command against a JSON file store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window,
    };

    use roster_shuffle::platform::{self, LocalStore};
    use roster_shuffle::{RosterApp, RosterError, ValidationError, fixed_width};

    type App = RosterApp<LocalStore>;

    fn window() -> Window {
        web_sys::window().expect("no window")
    }

    fn document() -> Document {
        window().document().expect("no document")
    }

    fn alert(message: &str) {
        let _ = window().alert_with_message(message);
    }

    /// Show an error as a blocking notice
    fn report(err: &RosterError) {
        log::warn!("{}", err);
        alert(&err.to_string());
    }

    fn name_input() -> Option<HtmlTextAreaElement> {
        document().get_element_by_id("nameInput")?.dyn_into().ok()
    }

    fn list_name_input() -> Option<HtmlInputElement> {
        document().get_element_by_id("listNameInput")?.dyn_into().ok()
    }

    fn selected_list() -> String {
        document()
            .get_element_by_id("listSelector")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
            .map(|sel| sel.value())
            .unwrap_or_default()
    }

    /// Rebuild the saved-list dropdown
    fn render_selector(app: &App) {
        let document = document();
        let Some(selector) = document.get_element_by_id("listSelector") else {
            return;
        };
        selector.set_inner_html("<option value=\"\">-- Load a Saved List --</option>");

        let names = match app.saved_list_names() {
            Ok(names) => names,
            Err(e) => {
                log::warn!("Could not list saved lists: {}", e);
                return;
            }
        };
        for name in names {
            if let Ok(option) = document.create_element("option") {
                let _ = option.set_attribute("value", &name);
                option.set_text_content(Some(&name));
                let _ = selector.append_child(&option);
            }
        }
    }

    fn list_item(
        document: &Document,
        index: usize,
        name: &str,
        checked: bool,
        width: usize,
    ) -> Option<Element> {
        let item = document.create_element("div").ok()?;
        item.set_class_name("list-item");

        let checkbox: HtmlInputElement = document.create_element("input").ok()?.dyn_into().ok()?;
        checkbox.set_type("checkbox");
        checkbox.set_id(&format!("student-{}", index));
        checkbox.set_checked(checked);
        let _ = checkbox.set_attribute("data-index", &index.to_string());
        let _ = item.append_child(&checkbox);

        let label = document.create_element("span").ok()?;
        label.set_text_content(Some(&fixed_width(name, width)));
        let _ = item.append_child(&label);
        Some(item)
    }

    /// Draw the active list and its heading
    fn render_list(app: &App) {
        let document = document();
        let session = app.session();

        if let Some(el) = document.get_element_by_id("currentListName") {
            el.set_text_content(Some(session.binding.label()));
        }
        if let Some(input) = name_input() {
            input.set_value(&session.list.to_text());
        }

        let Some(container) = document.get_element_by_id("listContainer") else {
            return;
        };
        container.set_inner_html("");

        if session.list.is_empty() {
            container.set_inner_html(
                "<p>The list is empty. Enter names and click \"Shuffle &amp; Display\".</p>",
            );
            return;
        }

        let width = app.settings().name_width;
        for (index, entry) in session.list.entries.iter().enumerate() {
            if let Some(item) = list_item(&document, index, &entry.name, entry.checked, width) {
                let _ = container.append_child(&item);
            }
        }
    }

    fn render(app: &App) {
        render_list(app);
        render_selector(app);
    }

    /// Attach a click handler to the button with `id`
    fn on_click(app: &Rc<RefCell<App>>, id: &str, handler: fn(&mut App)) {
        let Some(btn) = document().get_element_by_id(id) else {
            log::warn!("Missing button #{}", id);
            return;
        };
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut app = app.borrow_mut();
            handler(&mut app);
            render(&app);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn shuffle_clicked(app: &mut App) {
        let raw = name_input().map(|input| input.value()).unwrap_or_default();
        match app.ingest(&raw) {
            Ok(_) => {}
            // Nothing typed yet, nothing to do
            Err(RosterError::Validation(ValidationError::NoNames)) => {}
            Err(e) => report(&e),
        }
    }

    fn regenerate_clicked(app: &mut App) {
        if app.list().is_empty() {
            return;
        }
        match app.regenerate() {
            Ok(kept) if app.settings().notify => alert(&format!(
                "List Regenerated! Students who didn't answer ({}) are now at the top.",
                kept
            )),
            Ok(_) => {}
            Err(e) => report(&e),
        }
    }

    fn save_clicked(app: &mut App) {
        let input = list_name_input();
        let name = input.as_ref().map(|i| i.value()).unwrap_or_default();
        match app.save(&name) {
            Ok(name) => {
                if let Some(input) = input {
                    input.set_value("");
                }
                if app.settings().notify {
                    alert(&format!("List \"{}\" saved!", name));
                }
            }
            Err(e) => report(&e),
        }
    }

    fn load_clicked(app: &mut App) {
        let name = selected_list();
        if name.is_empty() {
            return;
        }
        match app.load(&name).map(|_| ()) {
            Ok(()) if app.settings().notify => {
                alert(&format!("List \"{}\" loaded successfully!", name))
            }
            Ok(()) => {}
            Err(e) => report(&e),
        }
    }

    fn delete_clicked(app: &mut App) {
        let name = selected_list();
        if name.is_empty() {
            alert("Please select a list to delete.");
            return;
        }
        if app.settings().confirm_delete {
            let prompt = format!("Are you sure you want to delete the list: \"{}\"?", name);
            if !window().confirm_with_message(&prompt).unwrap_or(false) {
                return;
            }
        }
        match app.delete(&name) {
            Ok(()) if app.settings().notify => alert(&format!("List \"{}\" deleted.", name)),
            Ok(()) => {}
            Err(e) => report(&e),
        }
    }

    fn clear_clicked(app: &mut App) {
        if let Err(e) = app.clear() {
            report(&e);
        }
    }

    /// Build a print-only page of shuffled segments, print it, remove it
    fn print_clicked(app: &mut App) {
        let segments = match app.print_segments() {
            Ok(segments) => segments,
            Err(RosterError::Validation(ValidationError::EmptyList)) => {
                alert("Please load or generate a list first.");
                return;
            }
            Err(e) => {
                report(&e);
                return;
            }
        };

        let document = document();
        let Some(body) = document.body() else {
            return;
        };
        let Ok(page) = document.create_element("div") else {
            return;
        };
        page.set_class_name("print-page");

        for (i, segment) in segments.iter().enumerate() {
            let Ok(container) = document.create_element("div") else {
                continue;
            };
            container.set_class_name(&format!("list-container segment-{}", i + 1));
            for name in segment {
                if let (Ok(item), Ok(span)) =
                    (document.create_element("div"), document.create_element("span"))
                {
                    item.set_class_name("list-item");
                    span.set_text_content(Some(name));
                    let _ = item.append_child(&span);
                    let _ = container.append_child(&item);
                }
            }
            let _ = page.append_child(&container);
        }

        let _ = body.append_child(&page);
        if let Err(e) = window().print() {
            log::warn!("Print failed: {:?}", e);
        }
        let _ = body.remove_child(&page);
    }

    /// Checkbox changes bubble up to the container and become commands
    fn setup_checkboxes(app: &Rc<RefCell<App>>) {
        let Some(container) = document().get_element_by_id("listContainer") else {
            return;
        };
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(index) = input
                .get_attribute("data-index")
                .and_then(|s| s.parse::<usize>().ok())
            else {
                return;
            };
            if let Err(e) = app.borrow_mut().set_checked(index, input.checked()) {
                report(&e);
            }
        });
        let _ = container.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Roster Shuffle starting...");

        let store = match LocalStore::open() {
            Ok(store) => store,
            Err(e) => {
                report(&e);
                return;
            }
        };
        let app = Rc::new(RefCell::new(App::restore(store, platform::new_rng())));

        on_click(&app, "shuffle-btn", shuffle_clicked);
        on_click(&app, "regenerate-btn", regenerate_clicked);
        on_click(&app, "save-btn", save_clicked);
        on_click(&app, "load-btn", load_clicked);
        on_click(&app, "delete-btn", delete_clicked);
        on_click(&app, "clear-btn", clear_clicked);
        on_click(&app, "print-btn", print_clicked);
        setup_checkboxes(&app);

        render(&app.borrow());
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::io::Read;
    use std::num::NonZeroUsize;
    use std::path::PathBuf;

    use clap::Parser;

    use roster_shuffle::persistence::FileStore;
    use roster_shuffle::{RosterApp, RosterError, ValidationError, fixed_width, platform};

    type App = RosterApp<FileStore>;

    #[derive(Parser, Debug)]
    #[command(name = "roster-shuffle")]
    #[command(version)]
    #[command(about = "Shuffle a class roster, track who has been called on, print segments")]
    pub struct Cli {
        /// JSON file holding the working list and saved lists
        #[arg(long, env = "ROSTER_STORE", default_value = "roster_store.json")]
        store: PathBuf,

        #[command(subcommand)]
        command: Option<Commands>,
    }

    #[derive(clap::Subcommand, Debug, PartialEq, Eq)]
    enum Commands {
        /// Read names (one per line) from stdin and shuffle them
        Shuffle,
        /// Print the active list
        Show,
        /// Mark entry N (1-based) as called on
        Check { index: NonZeroUsize },
        /// Clear the mark on entry N (1-based)
        Uncheck { index: NonZeroUsize },
        /// Unanswered names to the top, answered ones reshuffled behind them
        Regenerate,
        /// Save the active list under a name
        Save {
            #[arg(required = true, value_name = "NAME")]
            name: Vec<String>,
        },
        /// Make a saved list active
        Load {
            #[arg(required = true, value_name = "NAME")]
            name: Vec<String>,
        },
        /// Delete a saved list
        Delete {
            #[arg(required = true, value_name = "NAME")]
            name: Vec<String>,
        },
        /// Show saved list names
        Lists,
        /// Print shuffled segments of the active list
        Print,
        /// Empty the active list
        Clear,
    }

    fn show(app: &App) {
        println!("{}", app.binding().label());
        if app.list().is_empty() {
            println!("  (empty)");
            return;
        }
        let width = app.settings().name_width;
        for (i, entry) in app.list().entries.iter().enumerate() {
            let mark = if entry.checked { 'x' } else { ' ' };
            println!("{:>3}. [{}] {}", i + 1, mark, fixed_width(&entry.name, width));
        }
    }

    fn set_checked(app: &mut App, index: NonZeroUsize, checked: bool) -> Result<(), RosterError> {
        if !app.set_checked(index.get() - 1, checked)? {
            return Err(ValidationError::NoSuchEntry {
                index: index.get(),
                len: app.list().len(),
            }
            .into());
        }
        show(app);
        Ok(())
    }

    fn run_command(app: &mut App, command: Commands) -> Result<(), RosterError> {
        match command {
            Commands::Shuffle => {
                let mut raw = String::new();
                std::io::stdin()
                    .read_to_string(&mut raw)
                    .map_err(|e| RosterError::Storage(format!("stdin: {}", e)))?;
                app.ingest(&raw)?;
                show(app);
            }
            Commands::Show => show(app),
            Commands::Check { index } => set_checked(app, index, true)?,
            Commands::Uncheck { index } => set_checked(app, index, false)?,
            Commands::Regenerate => {
                let kept = app.regenerate()?;
                println!("{} unanswered names moved to the top", kept);
                show(app);
            }
            // Saved-list names may contain spaces
            Commands::Save { name } => {
                let name = app.save(&name.join(" "))?;
                println!("List \"{}\" saved", name);
            }
            Commands::Load { name } => {
                app.load(&name.join(" "))?;
                show(app);
            }
            Commands::Delete { name } => {
                let name = name.join(" ");
                app.delete(&name)?;
                println!("List \"{}\" deleted", name);
            }
            Commands::Lists => {
                for name in app.saved_list_names()? {
                    println!("{}", name);
                }
            }
            Commands::Print => {
                for (i, segment) in app.print_segments()?.iter().enumerate() {
                    println!("--- Segment {} ---", i + 1);
                    for name in segment {
                        println!("{}", name);
                    }
                }
            }
            Commands::Clear => {
                app.clear()?;
                show(app);
            }
        }
        Ok(())
    }

    pub fn run(cli: Cli) -> Result<(), RosterError> {
        log::info!("Using store {}", cli.store.display());
        let store = FileStore::open(cli.store)?;
        let mut app = App::restore(store, platform::new_rng());
        run_command(&mut app, cli.command.unwrap_or(Commands::Show))
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Roster Shuffle (native) starting...");

    let cli = cli::Cli::parse();
    if let Err(e) = cli::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
