//! Collects control points click by click and draws the curve once enough are in.
//!
//! ```
//! use bezier_pen::{EngineConfiguration, Pen, Phase, Point};
//!
//! let mut pen = Pen::new(EngineConfiguration {
//!     order: 3,
//!     ..Default::default()
//! })
//! .unwrap();
//! pen.on_click(Point::new(0.0, 0.0));
//! pen.on_click(Point::new(10.0, 0.0));
//! assert_eq!(pen.phase(), Phase::Collecting);
//! pen.on_click(Point::new(10.0, 10.0));
//! assert_eq!(pen.phase(), Phase::Complete);
//! ```

use crate::config::{check_guide_count, check_order, ConfigError, EngineConfiguration};
use crate::curve::Curve;
use crate::geometry::Point;
use crate::render::RenderPrimitive;

/// Whether a pen is still waiting for clicks
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Less points than the configured order have been collected
    Collecting,

    /// The curve has been drawn, the next click starts a new one
    Complete,
}

/// The point collection state machine.
///
/// Every operation replaces the pen's primitives as a whole,
/// a drawing surface should be cleared and repopulated from [`Pen::primitives`] afterwards.
#[derive(Clone, Debug)]
pub struct Pen {
    config: EngineConfiguration,
    points: Vec<Point>,
    phase: Phase,
    primitives: Vec<RenderPrimitive>,
}

impl Pen {
    /// Create an empty pen after validating `config`.
    pub fn new(config: EngineConfiguration) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Pen {
            points: Vec::with_capacity(config.order),
            config,
            phase: Phase::Collecting,
            primitives: Vec::new(),
        })
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfiguration {
        &self.config
    }

    /// The control points collected so far
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Everything which should be on the drawing surface right now
    pub fn primitives(&self) -> &[RenderPrimitive] {
        &self.primitives
    }

    /// Feed a single user selected position.
    ///
    /// A click after a completed curve discards its points first.
    pub fn on_click(&mut self, point: Point) -> &[RenderPrimitive] {
        if self.phase == Phase::Complete {
            log::debug!("starting a new curve");
            self.points.clear();
            self.primitives.clear();
            self.phase = Phase::Collecting;
        }

        self.points.push(point);
        if self.points.len() == self.config.order {
            self.draw_curve();
        } else {
            self.primitives
                .push(RenderPrimitive::label(point, self.points.len()));
        }
        &self.primitives
    }

    /// Change the number of control points per curve.
    ///
    /// Already collected points beyond the new order are dropped.
    /// If the remaining points fill the new order, the curve is drawn right away,
    /// otherwise the pen waits for the missing clicks.
    pub fn set_order(&mut self, order: usize) -> Result<&[RenderPrimitive], ConfigError> {
        if let Err(error) = check_order(order) {
            log::warn!("rejected order change: {}", error);
            return Err(error);
        }
        self.config.order = order;
        self.points.truncate(order);
        self.evaluate();
        Ok(&self.primitives[..])
    }

    /// Change the number of guide points per segment without dropping any points.
    pub fn set_guide_count(&mut self, guide_count: usize) -> Result<&[RenderPrimitive], ConfigError> {
        if let Err(error) = check_guide_count(guide_count) {
            log::warn!("rejected guide count change: {}", error);
            return Err(error);
        }
        self.config.guide_count = guide_count;
        self.evaluate();
        Ok(&self.primitives[..])
    }

    /// Open or close the curve without dropping any points.
    pub fn set_closed(&mut self, closed: bool) -> &[RenderPrimitive] {
        self.config.closed = closed;
        self.evaluate();
        &self.primitives
    }

    /// Toggle the control segments' visibility.
    ///
    /// The current primitives are restyled, nothing is recomputed.
    pub fn set_show_control_segments(&mut self, show: bool) -> &[RenderPrimitive] {
        self.config.show_control_segments = show;
        self.restyle();
        &self.primitives
    }

    /// Toggle between the curve's dots and its segments.
    ///
    /// The current primitives are restyled, nothing is recomputed.
    pub fn set_show_curve_segments(&mut self, show: bool) -> &[RenderPrimitive] {
        self.config.show_curve_segments = show;
        self.restyle();
        &self.primitives
    }

    /// Redraws from scratch for the collected points.
    fn evaluate(&mut self) {
        if self.points.len() == self.config.order {
            self.draw_curve();
        } else {
            log::debug!(
                "collecting, {} of {} points",
                self.points.len(),
                self.config.order
            );
            self.phase = Phase::Collecting;
            self.primitives = self
                .points
                .iter()
                .enumerate()
                .map(|(i, &point)| RenderPrimitive::label(point, i + 1))
                .collect();
        }
    }

    fn draw_curve(&mut self) {
        let curve = Curve::from_config(&self.points, &self.config);
        self.primitives = curve.render(&self.config.style());
        self.phase = Phase::Complete;
        log::debug!(
            "drew curve of {} points as {} primitives",
            self.points.len(),
            self.primitives.len()
        );
    }

    fn restyle(&mut self) {
        let style = self.config.style();
        for primitive in self.primitives.iter_mut() {
            primitive.apply_style(&style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen(order: usize) -> Pen {
        Pen::new(EngineConfiguration {
            order,
            guide_count: 4,
            ..Default::default()
        })
        .unwrap()
    }

    fn labels(primitives: &[RenderPrimitive]) -> Vec<String> {
        primitives
            .iter()
            .filter_map(|primitive| match primitive {
                RenderPrimitive::Label { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = EngineConfiguration {
            order: 0,
            ..Default::default()
        };
        assert!(Pen::new(config).is_err());
    }

    #[test]
    fn labels_every_click() {
        let mut pen = pen(4);
        pen.on_click(Point::new(1.0, 1.0));
        let primitives = pen.on_click(Point::new(2.0, 2.0));
        assert_eq!(labels(primitives), vec!["1", "2"]);
        assert_eq!(pen.phase(), Phase::Collecting);
    }

    #[test]
    fn completes_and_restarts() {
        let mut pen = pen(2);
        pen.on_click(Point::new(0.0, 0.0));
        let primitives = pen.on_click(Point::new(10.0, 0.0)).to_vec();
        assert_eq!(pen.phase(), Phase::Complete);
        assert!(labels(&primitives).is_empty());
        assert_eq!(pen.points().len(), 2);

        let primitives = pen.on_click(Point::new(5.0, 5.0));
        assert_eq!(labels(primitives), vec!["1"]);
        assert_eq!(pen.points(), &[Point::new(5.0, 5.0)]);
        assert_eq!(pen.phase(), Phase::Collecting);
    }

    #[test]
    fn lower_order_truncates() {
        let mut pen = pen(6);
        for i in 0..5 {
            pen.on_click(Point::new(i as f64, 0.0));
        }
        pen.set_order(3).unwrap();
        assert_eq!(pen.points().len(), 3);
        assert_eq!(pen.phase(), Phase::Complete);
    }

    #[test]
    fn higher_order_waits_for_clicks() {
        let mut pen = pen(3);
        for i in 0..3 {
            pen.on_click(Point::new(i as f64, 0.0));
        }
        assert_eq!(pen.phase(), Phase::Complete);

        let primitives = pen.set_order(5).unwrap();
        assert_eq!(labels(primitives), vec!["1", "2", "3"]);
        assert_eq!(pen.phase(), Phase::Collecting);

        pen.on_click(Point::new(3.0, 1.0));
        pen.on_click(Point::new(4.0, 1.0));
        assert_eq!(pen.phase(), Phase::Complete);
        assert_eq!(pen.points().len(), 5);
    }

    #[test]
    fn invalid_changes_keep_state() {
        let mut pen = pen(3);
        pen.on_click(Point::new(0.0, 0.0));
        let before = pen.primitives().to_vec();

        assert!(matches!(
            pen.set_order(1),
            Err(ConfigError::OrderTooSmall { order: 1 })
        ));
        assert!(matches!(
            pen.set_guide_count(0),
            Err(ConfigError::GuideCountTooSmall { guide_count: 0 })
        ));
        assert_eq!(pen.config().order, 3);
        assert_eq!(pen.config().guide_count, 4);
        assert_eq!(pen.points().len(), 1);
        assert_eq!(pen.primitives(), &before[..]);
    }

    #[test]
    fn closing_keeps_points() {
        let mut pen = pen(3);
        pen.on_click(Point::new(0.0, 0.0));
        pen.on_click(Point::new(1.0, 0.0));
        let primitives = pen.set_closed(true);
        assert_eq!(labels(primitives), vec!["1", "2"]);
        assert!(pen.config().closed);
        assert_eq!(pen.points().len(), 2);
    }

    #[test]
    fn toggles_restyle_in_place() {
        let mut pen = pen(3);
        for point in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)] {
            pen.on_click(Point::new(point.0, point.1));
        }
        pen.set_show_curve_segments(true);
        pen.set_show_control_segments(false);

        let mut fresh = Pen::new(pen.config().clone()).unwrap();
        for &point in pen.points() {
            fresh.on_click(point);
        }
        assert_eq!(pen.primitives(), fresh.primitives());
    }
}
