// Prompt builders for the model calls. All pure string assembly.

// Literal every synthesized stage-3 prompt has to open with.
pub const PHOTOGRAPH_PREFIX: &str = "A photograph of";

pub fn edit_prompt(art_description: &str) -> String {
    format!(
        "Using the provided image of a room, please add {art_description} to the wall.

The artwork should:
- Be placed on the most prominent wall visible in the image
- Have realistic perspective and proportions that match the room's geometry
- Include proper lighting and shadows that match the existing room lighting
- Be properly sized for the space (not too large or too small - approximately proportional to the wall space)
- Look professionally installed and naturally integrated into the room
- Maintain all other elements of the room exactly as they appear in the original image

Generate a photorealistic image showing how this room would look with the artwork installed. The result should look like a professional interior design visualization."
    )
}

pub fn room_analysis_prompt() -> String {
    "Analyze this photo of a room in detail. Describe:
- The wall colors, textures and the lighting conditions on the walls
- The overall style of the room (modern, traditional, minimalist, etc.)
- The available wall space and which wall is the most prominent
- The camera perspective and angle the photo was taken from
- The existing furniture and decor, and where each piece sits

Respond with a descriptive paragraph only. Do not generate an image."
        .to_string()
}

pub fn synthesis_prompt(room_analysis: &str, art_description: &str) -> String {
    format!(
        "Here is a description of a room:
{room_analysis}

Write a single, detailed prompt for an image generation model that recreates this exact room with {art_description} hanging on the most prominent wall.

The prompt must:
- Start with the exact words \"{PHOTOGRAPH_PREFIX}\"
- Be one continuous paragraph with no lists or headings
- Describe a photorealistic interior photograph
- Keep the same camera angle, perspective and composition as the original photo
- Keep the wall colors, lighting, furniture and decor exactly as described
- Place the artwork at a realistic size with lighting and shadows matching the room

Respond with the prompt only."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_edit_prompt_is_built_then_description_and_requirements_are_embedded() {
        let prompt = edit_prompt("a tiny watercolor");

        assert!(prompt.starts_with(
            "Using the provided image of a room, please add a tiny watercolor to the wall."
        ));
        assert!(prompt.contains("most prominent wall"));
        assert!(prompt.contains("lighting and shadows"));
        assert!(prompt.contains("Maintain all other elements of the room"));
        assert!(prompt.ends_with("professional interior design visualization."));
    }

    #[test]
    fn when_room_analysis_prompt_is_built_then_it_asks_for_text_only() {
        let prompt = room_analysis_prompt();

        assert!(prompt.contains("camera perspective"));
        assert!(prompt.contains("Do not generate an image."));
    }

    #[test]
    fn when_synthesis_prompt_is_built_then_analysis_description_and_prefix_are_embedded() {
        let prompt = synthesis_prompt("Warm beige walls, north light.", "a canvas print");

        assert!(prompt.contains("Warm beige walls, north light."));
        assert!(prompt.contains("with a canvas print hanging"));
        assert!(prompt.contains("Start with the exact words \"A photograph of\""));
        assert!(prompt.contains("same camera angle"));
    }
}
