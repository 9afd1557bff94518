use slotmap::SlotMap;

use crate::error::{Result, SceneError};
use crate::ordering::{by_area, by_perimeter_then_area};

use super::StyledPolygon;

slotmap::new_key_type! {
    /// Unique identifier for a figure in a [`FigureScene`].
    pub struct FigureId;
}

/// A figure together with its visibility flag.
#[derive(Debug, Clone)]
struct FigureItem {
    figure: StyledPolygon,
    visible: bool,
}

/// Z-ordered collection of figures.
///
/// The scene owns its figures; removing one hands ownership back to the caller.
/// Draw order runs from bottom (first) to top (last). New figures are visible
/// and go on top.
#[derive(Debug, Default)]
pub struct FigureScene {
    items: SlotMap<FigureId, FigureItem>,
    order: Vec<FigureId>,
}

impl FigureScene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scene holding `figures`, the first one at the bottom.
    #[must_use]
    pub fn from_figures(figures: impl IntoIterator<Item = StyledPolygon>) -> Self {
        let mut scene = Self::new();
        for figure in figures {
            scene.insert(figure);
        }
        scene
    }

    /// Adds a figure on top of the scene and returns its ID.
    pub fn insert(&mut self, figure: StyledPolygon) -> FigureId {
        let id = self.items.insert(FigureItem {
            figure,
            visible: true,
        });
        self.order.push(id);
        id
    }

    /// Removes a figure from the scene and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::FigureNotFound`] if the ID is not in the scene.
    pub fn remove(&mut self, id: FigureId) -> std::result::Result<StyledPolygon, SceneError> {
        let item = self.items.remove(id).ok_or(SceneError::FigureNotFound)?;
        self.order.retain(|&other| other != id);
        Ok(item.figure)
    }

    /// Returns a reference to a figure.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::FigureNotFound`] if the ID is not in the scene.
    pub fn figure(&self, id: FigureId) -> std::result::Result<&StyledPolygon, SceneError> {
        self.item(id).map(|item| &item.figure)
    }

    /// Returns whether a figure is drawn and hit-tested.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::FigureNotFound`] if the ID is not in the scene.
    pub fn is_visible(&self, id: FigureId) -> std::result::Result<bool, SceneError> {
        self.item(id).map(|item| item.visible)
    }

    /// Shows or hides a figure.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::FigureNotFound`] if the ID is not in the scene.
    pub fn set_visible(
        &mut self,
        id: FigureId,
        visible: bool,
    ) -> std::result::Result<(), SceneError> {
        self.item_mut(id)?.visible = visible;
        Ok(())
    }

    /// Moves a figure to the top of the draw order.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::FigureNotFound`] if the ID is not in the scene.
    pub fn bring_to_front(&mut self, id: FigureId) -> std::result::Result<(), SceneError> {
        let pos = self
            .order
            .iter()
            .position(|&other| other == id)
            .ok_or(SceneError::FigureNotFound)?;
        self.order.remove(pos);
        self.order.push(id);
        Ok(())
    }

    /// Translates a figure by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is not in the scene or the translation
    /// overflows the coordinate range.
    pub fn translate(&mut self, id: FigureId, dx: i32, dy: i32) -> Result<()> {
        self.item_mut(id)?.figure.translate(dx, dy)?;
        Ok(())
    }

    /// Returns the topmost visible figure containing the point, if any.
    #[must_use]
    pub fn figure_at(&self, x: i32, y: i32) -> Option<FigureId> {
        self.order.iter().rev().copied().find(|&id| {
            self.items
                .get(id)
                .is_some_and(|item| item.visible && item.figure.contains_point(x, y))
        })
    }

    /// Iterates over all figures in draw order, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = (FigureId, &StyledPolygon)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.items.get(id).map(|item| (id, &item.figure)))
    }

    /// Iterates over visible figures in draw order, bottom first.
    pub fn visible(&self) -> impl Iterator<Item = (FigureId, &StyledPolygon)> + '_ {
        self.order.iter().filter_map(|&id| {
            self.items
                .get(id)
                .filter(|item| item.visible)
                .map(|item| (id, &item.figure))
        })
    }

    /// Returns the figure IDs ordered by area (unknown areas last).
    #[must_use]
    pub fn sorted_by_area(&self) -> Vec<FigureId> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(_, a), (_, b)| by_area(*a, *b));
        entries.into_iter().map(|(id, _)| id).collect()
    }

    /// Returns the figure IDs ordered by perimeter, then area.
    #[must_use]
    pub fn sorted_by_perimeter_then_area(&self) -> Vec<FigureId> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(_, a), (_, b)| by_perimeter_then_area(*a, *b));
        entries.into_iter().map(|(id, _)| id).collect()
    }

    /// Consumes the scene, returning the figures in draw order.
    #[must_use]
    pub fn into_figures(mut self) -> Vec<StyledPolygon> {
        self.order
            .iter()
            .filter_map(|&id| self.items.remove(id).map(|item| item.figure))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn item(&self, id: FigureId) -> std::result::Result<&FigureItem, SceneError> {
        self.items.get(id).ok_or(SceneError::FigureNotFound)
    }

    fn item_mut(&mut self, id: FigureId) -> std::result::Result<&mut FigureItem, SceneError> {
        self.items.get_mut(id).ok_or(SceneError::FigureNotFound)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FigureError;
    use crate::math::Vertex;

    fn square(name: &str, x: i32, y: i32, size: i32) -> StyledPolygon {
        StyledPolygon::new(
            &[
                Vertex::new(x, y),
                Vertex::new(x + size, y),
                Vertex::new(x + size, y + size),
                Vertex::new(x, y + size),
            ],
            name,
            "#000000",
            "#FFFFFF",
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn insert_and_iterate_in_draw_order() {
        let scene = FigureScene::from_figures([square("a", 0, 0, 2), square("b", 5, 5, 2)]);
        let names: Vec<_> = scene.iter().map(|(_, f)| f.display_name()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn figure_at_picks_topmost_visible() {
        let mut scene = FigureScene::new();
        let bottom = scene.insert(square("bottom", 0, 0, 10));
        let top = scene.insert(square("top", 2, 2, 4));
        assert_eq!(scene.figure_at(3, 3), Some(top));
        assert_eq!(scene.figure_at(8, 8), Some(bottom));
        assert_eq!(scene.figure_at(20, 20), None);

        scene.set_visible(top, false).unwrap();
        assert_eq!(scene.figure_at(3, 3), Some(bottom));
        assert!(!scene.is_visible(top).unwrap());
        assert_eq!(scene.visible().count(), 1);
    }

    #[test]
    fn bring_to_front_changes_hit_order() {
        let mut scene = FigureScene::new();
        let bottom = scene.insert(square("bottom", 0, 0, 10));
        let top = scene.insert(square("top", 2, 2, 4));
        scene.bring_to_front(bottom).unwrap();
        assert_eq!(scene.figure_at(3, 3), Some(bottom));
        let ids: Vec<_> = scene.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, [top, bottom]);
    }

    #[test]
    fn translate_through_scene() {
        let mut scene = FigureScene::new();
        let id = scene.insert(square("a", 0, 0, 2));
        scene.translate(id, 10, 0).unwrap();
        assert_eq!(scene.figure(id).unwrap().vertices()[0], Vertex::new(10, 0));
        assert_eq!(scene.figure_at(11, 1), Some(id));
    }

    #[test]
    fn remove_returns_figure() {
        let mut scene = FigureScene::new();
        let id = scene.insert(square("a", 0, 0, 2));
        let fig = scene.remove(id).unwrap();
        assert_eq!(fig.display_name(), "a");
        assert!(scene.is_empty());
        assert_eq!(scene.remove(id), Err(SceneError::FigureNotFound));
        assert!(matches!(
            scene.translate(id, 1, 1),
            Err(FigureError::Scene(SceneError::FigureNotFound))
        ));
        assert_eq!(scene.bring_to_front(id), Err(SceneError::FigureNotFound));
    }

    #[test]
    fn sorted_views() {
        let mut scene = FigureScene::new();
        let big = scene.insert(square("big", 0, 0, 5));
        let small = scene.insert(square("small", 0, 0, 1));
        assert_eq!(scene.sorted_by_area(), [small, big]);
        assert_eq!(scene.sorted_by_perimeter_then_area(), [small, big]);
    }

    #[test]
    fn into_figures_keeps_draw_order() {
        let mut scene = FigureScene::from_figures([square("a", 0, 0, 2), square("b", 5, 5, 2)]);
        let first = scene.iter().map(|(id, _)| id).next().unwrap();
        scene.bring_to_front(first).unwrap();
        let names: Vec<_> = scene
            .into_figures()
            .iter()
            .map(|f| f.display_name().to_owned())
            .collect();
        assert_eq!(names, ["b", "a"]);
    }
}
