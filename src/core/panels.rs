use crate::domain::model::PanelDefinition;

/// Caption written next to the panel images. Always describes panel 1.
pub const EXPLANATION_TEXT: &str =
    "Explanation of Panel 1: Kid yawning in class saying 'History is boring.'";

const PANELS: [(&str, &str); 12] = [
    (
        "Bored in Class",
        "A child yawning in a classroom with a history book on the desk, in a cartoony style.",
    ),
    (
        "Time Travel Begins",
        "A swirling colorful portal opening near the child in the classroom.",
    ),
    (
        "Ancient Egypt",
        "The child looking amazed while standing in ancient Egypt with a pyramid in the background, cartoon style.",
    ),
    (
        "Medieval Castle",
        "A child watching knights in armor near a castle, illustrated in a cartoony style.",
    ),
    (
        "Renaissance Art",
        "A child observing an artist painting in a Renaissance studio, in a cartoony illustration style.",
    ),
    (
        "Industrial Revolution",
        "A child looking at a city with factories and smokestacks, cartoony style.",
    ),
    (
        "Early Flight",
        "A child watching an old-fashioned airplane take off, with excitement, in a cartoon style.",
    ),
    (
        "Historical Scene",
        "A child observing a scene with soldiers and vehicles from a past era, illustrated in a cartoony style.",
    ),
    (
        "Historic March",
        "A child in a crowd, observing people holding signs and walking together, in a cartoony illustration style.",
    ),
    (
        "Space Exploration",
        "A child looking up at an astronaut on the moon, with the Earth in the background, illustrated in a cartoony style.",
    ),
    (
        "Back to Class",
        "The child reappearing in the classroom, looking excited, with the history book open on the desk.",
    ),
    (
        "History is Amazing!",
        "A child eagerly talking to friends in a classroom setting, in a cartoon style.",
    ),
];

/// The twelve panels of "History Comes Alive", in reading order.
pub fn history_comes_alive() -> Vec<PanelDefinition> {
    PANELS
        .iter()
        .map(|(title, prompt)| PanelDefinition::new(*title, *prompt))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetcher::image_file_name;
    use std::collections::HashSet;

    #[test]
    fn test_twelve_panels_in_order() {
        let panels = history_comes_alive();
        assert_eq!(panels.len(), 12);
        assert_eq!(panels[0].title, "Bored in Class");
        assert_eq!(panels[11].title, "History is Amazing!");
    }

    #[test]
    fn test_panel_file_names_are_unique() {
        let names: HashSet<String> = history_comes_alive()
            .iter()
            .map(|p| image_file_name(&p.title))
            .collect();
        assert_eq!(names.len(), 12);
    }
}
