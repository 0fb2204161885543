/// Presentation surfaces: panels, the card grid, and the overview charts.
pub mod cards;
pub mod panels;
pub mod plot;
