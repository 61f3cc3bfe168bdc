use crate::params::ParamId;

pub const EDITOR_WIDTH: i32 = 700;
pub const EDITOR_HEIGHT: i32 = 450;

const OUTER_MARGIN: i32 = 10;
const ROW_PADDING: i32 = 20;
const BRANDING_INSET: i32 = 20;
const LABEL_OFFSET: i32 = 18;
const LABEL_HEIGHT: i32 = 20;
const VALUE_BOX_WIDTH: i32 = 50;
const VALUE_BOX_HEIGHT: i32 = 20;

/// Integer pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn centre_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Shrink by `amount` on every side.
    pub fn reduced(&self, amount: i32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2 * amount).max(0),
            (self.height - 2 * amount).max(0),
        )
    }

    pub fn remove_from_top(&mut self, amount: i32) -> Self {
        let amount = amount.clamp(0, self.height);
        let taken = Self::new(self.x, self.y, self.width, amount);
        self.y += amount;
        self.height -= amount;
        taken
    }

    pub fn remove_from_left(&mut self, amount: i32) -> Self {
        let amount = amount.clamp(0, self.width);
        let taken = Self::new(self.x, self.y, amount, self.height);
        self.x += amount;
        self.width -= amount;
        taken
    }

    pub fn remove_from_right(&mut self, amount: i32) -> Self {
        let amount = amount.clamp(0, self.width);
        self.width -= amount;
        Self::new(self.right(), self.y, amount, self.height)
    }

    pub const fn with_y(&self, y: i32) -> Self {
        Self::new(self.x, y, self.width, self.height)
    }

    pub const fn with_height(&self, height: i32) -> Self {
        Self::new(self.x, self.y, self.width, height)
    }
}

/// Truncating fraction of a pixel length.
fn fraction(length: i32, proportion: f32) -> i32 {
    (length as f32 * proportion) as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnobRow {
    /// Input, gate and output along the top.
    Utility,
    /// The six amp controls.
    Amp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnobPlacement {
    pub param: ParamId,
    pub row: KnobRow,
    pub bounds: Bounds,
}

impl KnobPlacement {
    pub const fn label(&self) -> &'static str {
        self.param.id()
    }

    /// Caption area, sitting just above the knob.
    pub const fn label_bounds(&self) -> Bounds {
        self.bounds
            .with_y(self.bounds.y - LABEL_OFFSET)
            .with_height(LABEL_HEIGHT)
    }

    /// Only the decibel controls show their value.
    pub const fn shows_value(&self) -> bool {
        self.param.is_decibels()
    }

    pub fn value_box(&self) -> Option<Bounds> {
        if !self.shows_value() {
            return None;
        }

        let width = VALUE_BOX_WIDTH.min(self.bounds.width);
        let height = VALUE_BOX_HEIGHT.min(self.bounds.height);
        Some(Bounds::new(
            self.bounds.centre_x() - width / 2,
            self.bounds.bottom() - height,
            width,
            height,
        ))
    }

    /// Area left for the dial itself once the value box is taken out.
    pub fn dial_bounds(&self) -> Bounds {
        let mut dial = self.bounds;
        if let Some(value_box) = self.value_box() {
            dial.height -= value_box.height;
        }
        dial
    }
}

/// Positions of everything on the editor panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLayout {
    width: i32,
    height: i32,
    knobs: Vec<KnobPlacement>,
}

impl EditorLayout {
    pub fn new(width: i32, height: i32) -> Self {
        let mut area = Bounds::new(0, 0, width, height).reduced(OUTER_MARGIN);
        let mut knobs = Vec::with_capacity(ParamId::COUNT);

        let mut place = |param, row, bounds| {
            knobs.push(KnobPlacement { param, row, bounds });
        };

        let mut top_row = area.remove_from_top(fraction(area.height, 0.30));

        let mut top_left = top_row.remove_from_left(fraction(top_row.width, 0.4));
        place(
            ParamId::Input,
            KnobRow::Utility,
            top_left.remove_from_left(fraction(top_left.width, 0.5)),
        );
        place(ParamId::Gate, KnobRow::Utility, top_left);
        place(
            ParamId::Output,
            KnobRow::Utility,
            top_row.remove_from_right(fraction(top_row.width, 0.25)),
        );

        area.remove_from_top(ROW_PADDING);
        let knob_width = area.width / 6;
        for param in [
            ParamId::Gain,
            ParamId::Bass,
            ParamId::Middle,
            ParamId::Treble,
            ParamId::Presence,
            ParamId::Level,
        ] {
            place(param, KnobRow::Amp, area.remove_from_left(knob_width));
        }

        Self {
            width,
            height,
            knobs,
        }
    }

    pub const fn panel(&self) -> Bounds {
        Bounds::new(0, 0, self.width, self.height)
    }

    pub fn knobs(&self) -> &[KnobPlacement] {
        &self.knobs
    }

    pub fn knob(&self, param: ParamId) -> Option<&KnobPlacement> {
        self.knobs.iter().find(|k| k.param == param)
    }

    /// Darker band painted behind the utility row.
    pub fn utility_strip(&self) -> Bounds {
        self.panel().remove_from_top(fraction(self.height, 0.25))
    }

    /// Branding text is drawn bottom-left inside this area.
    pub fn branding_area(&self) -> Bounds {
        self.panel().reduced(BRANDING_INSET)
    }
}

impl Default for EditorLayout {
    fn default() -> Self {
        Self::new(EDITOR_WIDTH, EDITOR_HEIGHT)
    }
}
