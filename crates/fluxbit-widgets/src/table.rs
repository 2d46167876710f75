//! Table component.
//!
//! The header is a single slot, rows a repeated slot. Row-level options
//! (striping, hover) are resolved by the parent and cascaded onto each
//! row's attribute bag during `before_render`; rows are unaware of the
//! table options and treat the classes as ordinary derived classes.

use fluxbit_core::attrs::AttrMap;
use fluxbit_core::class_list::{self, Position};
use fluxbit_core::component::Component;
use fluxbit_core::markup::{Element, Markup};
use fluxbit_core::slot::{Slot, SlotList};
use fluxbit_style::{StyleScope, StyleTable};

fn defaults() -> StyleTable {
    StyleTable::builder()
        .classes(
            "base",
            "w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400",
        )
        .classes("wrapper", "relative overflow-x-auto shadow-md sm:rounded-lg")
        .classes(
            "head",
            "text-xs text-gray-700 uppercase bg-gray-50 dark:bg-gray-700 dark:text-gray-400",
        )
        .classes("head_cell", "px-6 py-3")
        .classes("row", "bg-white border-b dark:bg-gray-800 dark:border-gray-700")
        .classes(
            "row_striped",
            "odd:bg-white odd:dark:bg-gray-900 even:bg-gray-50 even:dark:bg-gray-800",
        )
        .classes("row_hover", "hover:bg-gray-50 dark:hover:bg-gray-600")
        .classes("cell", "px-6 py-4")
        .classes(
            "caption",
            "p-5 text-lg font-semibold text-left rtl:text-right text-gray-900 bg-white \
             dark:text-white dark:bg-gray-800",
        )
        .build()
}

/// Style table for the table family.
pub static STYLES: StyleScope = StyleScope::new(defaults);

/// One body row of a [`Table`].
#[derive(Debug)]
pub struct TableRow {
    attrs: AttrMap,
    cells: Vec<Markup>,
}

impl TableRow {
    /// Recognized options: `remove_class`. Everything else passes through
    /// to the `tr` element.
    pub fn new(attrs: AttrMap) -> Self {
        Self {
            attrs,
            cells: Vec::new(),
        }
    }

    /// Append a cell. Insertion order is rendering order.
    #[must_use]
    pub fn cell(mut self, content: Markup) -> Self {
        self.cells.push(content);
        self
    }

    /// Append an escaped text cell.
    #[must_use]
    pub fn text_cell(self, content: impl Into<String>) -> Self {
        self.cell(Markup::text(content))
    }

    fn render(&self, cell_classes: &str) -> Markup {
        Element::new("tr")
            .with_attrs(self.attrs.clone())
            .children(self.cells.iter().map(|cell| {
                Element::new("td")
                    .class(cell_classes)
                    .child(cell.clone())
                    .build()
            }))
            .build()
    }
}

/// A data table with optional striping, hover highlight, and caption.
#[derive(Debug)]
pub struct Table {
    attrs: AttrMap,
    striped: bool,
    hoverable: bool,
    caption: Option<Markup>,
    head: Slot<Vec<Markup>>,
    rows: SlotList<TableRow>,
}

impl Table {
    /// Recognized options: `striped`, `hoverable`, `remove_class`.
    /// Everything else passes through to the `table` element.
    pub fn new(mut attrs: AttrMap) -> Self {
        let styles = STYLES.load();
        let striped = attrs.take_flag("striped", false);
        let hoverable = attrs.take_flag("hoverable", false);
        class_list::add(&mut attrs, styles.resolve(&["base"], ""), Position::Front);
        class_list::apply_remove_option(&mut attrs);
        Self {
            attrs,
            striped,
            hoverable,
            caption: None,
            head: Slot::new(),
            rows: SlotList::new(),
        }
    }

    /// Set the caption markup.
    #[must_use]
    pub fn caption(mut self, caption: Markup) -> Self {
        self.caption = Some(caption);
        self
    }

    /// Set the header row from text cells. Last write wins.
    #[must_use]
    pub fn with_head<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.head
            .set(cells.into_iter().map(Markup::text).collect());
        self
    }

    /// Set the header row from markup cells. Last write wins.
    #[must_use]
    pub fn with_head_markup(mut self, cells: Vec<Markup>) -> Self {
        self.head.set(cells);
        self
    }

    /// Append a body row. Insertion order is rendering order.
    #[must_use]
    pub fn add_row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Append a body row of text cells.
    #[must_use]
    pub fn add_text_row<I, S>(self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row = TableRow::new(AttrMap::new());
        for cell in cells {
            row = row.text_cell(cell);
        }
        self.add_row(row)
    }
}

impl Component for Table {
    fn before_render(&mut self) {
        let styles = STYLES.load();
        // Cascade table-level row styling onto each row's own bag.
        let row_classes = class_list::join([
            Some(if self.striped {
                styles.resolve(&["row_striped"], "")
            } else {
                styles.resolve(&["row"], "")
            }),
            self.hoverable.then(|| styles.resolve(&["row_hover"], "")),
        ]);
        for row in self.rows.iter_mut() {
            class_list::add(&mut row.attrs, &row_classes, Position::Front);
            class_list::apply_remove_option(&mut row.attrs);
        }
    }

    fn render(&self) -> Markup {
        let styles = STYLES.load();
        let caption = match &self.caption {
            Some(content) => Element::new("caption")
                .class(styles.resolve(&["caption"], ""))
                .child(content.clone())
                .build(),
            None => Markup::Empty,
        };
        let head = match self.head.get() {
            Some(cells) => Element::new("thead")
                .class(styles.resolve(&["head"], ""))
                .child(
                    Element::new("tr")
                        .children(cells.iter().map(|cell| {
                            Element::new("th")
                                .attr("scope", "col")
                                .class(styles.resolve(&["head_cell"], ""))
                                .child(cell.clone())
                                .build()
                        }))
                        .build(),
                )
                .build(),
            None => Markup::Empty,
        };
        let cell_classes = styles.resolve(&["cell"], "");
        let body = Element::new("tbody")
            .children(self.rows.iter().map(|row| row.render(cell_classes)))
            .build();
        Element::new("div")
            .class(styles.resolve(&["wrapper"], ""))
            .child(
                Element::new("table")
                    .with_attrs(self.attrs.clone())
                    .child(caption)
                    .child(head)
                    .child(body)
                    .build(),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxbit_core::component::render_to_string;

    #[test]
    fn renders_head_and_rows_in_order() {
        let mut table = Table::new(AttrMap::new())
            .with_head(["Name", "Role"])
            .add_text_row(["Ada", "Engineer"])
            .add_text_row(["Grace", "Admiral"]);
        let html = render_to_string(&mut table);
        assert!(html.contains("<thead"));
        assert!(html.contains("scope=\"col\""));
        assert!(html.find("Ada").unwrap() < html.find("Grace").unwrap());
        assert_eq!(html.matches("<tr").count(), 3);
    }

    #[test]
    fn striped_cascades_to_rows() {
        let mut table = Table::new(AttrMap::new().with("striped", true))
            .add_text_row(["a"])
            .add_text_row(["b"]);
        let html = render_to_string(&mut table);
        assert_eq!(html.matches("odd:bg-white").count(), 2);
        assert!(!html.contains("border-b"));
    }

    #[test]
    fn hoverable_adds_row_hover_classes() {
        let mut table = Table::new(AttrMap::new().with("hoverable", true)).add_text_row(["a"]);
        assert!(render_to_string(&mut table).contains("hover:bg-gray-50"));
    }

    #[test]
    fn row_attributes_pass_through() {
        let row = TableRow::new(AttrMap::new().with("data-testid", "row-1")).text_cell("x");
        let mut table = Table::new(AttrMap::new()).add_row(row);
        assert!(render_to_string(&mut table).contains("data-testid=\"row-1\""));
    }

    #[test]
    fn row_remove_class_can_strip_cascaded_classes() {
        let row = TableRow::new(AttrMap::new().with("remove_class", "border-b")).text_cell("x");
        let mut table = Table::new(AttrMap::new()).add_row(row);
        let html = render_to_string(&mut table);
        assert!(!html.contains("border-b "));
        assert!(html.contains("bg-white"));
    }

    #[test]
    fn caption_renders_inside_table() {
        let mut table = Table::new(AttrMap::new()).caption(Markup::text("Our people"));
        let html = render_to_string(&mut table);
        assert!(html.contains("<caption"));
        assert!(html.contains("Our people"));
    }

    #[test]
    fn no_head_slot_no_thead() {
        let mut table = Table::new(AttrMap::new()).add_text_row(["x"]);
        assert!(!render_to_string(&mut table).contains("<thead"));
    }
}
