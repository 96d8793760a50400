use crate::towers::filter::{visible_towers, FilterSelection};
use crate::towers::record::TowerRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Towers,
    Blankspots,
}

impl Layer {
    pub const ALL: [Self; 2] = [Self::Towers, Self::Blankspots];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Towers => "Menara Telekomunikasi",
            Self::Blankspots => "Lokasi Blankspot",
        }
    }
}

/// Marker layer switches. Independent of the filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerVisibility {
    pub towers_visible: bool,
    pub blankspots_visible: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            towers_visible: true,
            blankspots_visible: true,
        }
    }
}

impl LayerVisibility {
    pub const fn is_visible(&self, layer: Layer) -> bool {
        match layer {
            Layer::Towers => self.towers_visible,
            Layer::Blankspots => self.blankspots_visible,
        }
    }

    pub fn toggle(&mut self, layer: Layer) {
        match layer {
            Layer::Towers => self.towers_visible = !self.towers_visible,
            Layer::Blankspots => self.blankspots_visible = !self.blankspots_visible,
        }
    }

    pub fn show_towers(&mut self) {
        self.towers_visible = true;
    }
}

/// What the map draws this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInstruction<'a> {
    pub towers: Vec<&'a TowerRecord>,
    pub blankspots: bool,
}

pub fn render_instruction<'a>(
    all: &'a [TowerRecord],
    selection: &FilterSelection,
    visibility: LayerVisibility,
) -> RenderInstruction<'a> {
    RenderInstruction {
        towers: if visibility.towers_visible {
            visible_towers(all, selection)
        } else {
            Vec::new()
        },
        blankspots: visibility.blankspots_visible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, TowerStatus};
    use crate::towers::record::TowerId;
    use std::collections::BTreeMap;

    fn towers() -> Vec<TowerRecord> {
        ["XL", "Indosat"]
            .into_iter()
            .enumerate()
            .map(|(index, operator)| TowerRecord {
                id: TowerId::Number(index as i64),
                operator: operator.to_string(),
                status: TowerStatus::Active,
                position: GeoPoint::default(),
                metadata: BTreeMap::new(),
            })
            .collect()
    }

    #[test]
    fn both_layers_start_visible() {
        let all = towers();
        let instruction = render_instruction(&all, &FilterSelection::new(), LayerVisibility::default());
        assert_eq!(instruction.towers.len(), 2);
        assert!(instruction.blankspots);
    }

    #[test]
    fn hidden_towers_render_nothing_regardless_of_filter() {
        let all = towers();
        let mut visibility = LayerVisibility::default();
        visibility.toggle(Layer::Towers);

        let selection = FilterSelection::new().with_operators(["XL"]);
        let instruction = render_instruction(&all, &selection, visibility);
        assert!(instruction.towers.is_empty());
        assert!(instruction.blankspots);
    }

    #[test]
    fn layers_toggle_independently() {
        let mut visibility = LayerVisibility::default();
        visibility.toggle(Layer::Blankspots);
        assert!(visibility.is_visible(Layer::Towers));
        assert!(!visibility.is_visible(Layer::Blankspots));

        visibility.toggle(Layer::Blankspots);
        assert_eq!(visibility, LayerVisibility::default());
    }
}
