// Closed set of art types the client can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtType {
    Painting,
    Photograph,
    Sculpture,
    GalleryWall,
    AbstractArt,
    CanvasPrint,
}

impl ArtType {
    pub const ALL: [ArtType; 6] = [
        ArtType::Painting,
        ArtType::Photograph,
        ArtType::Sculpture,
        ArtType::GalleryWall,
        ArtType::AbstractArt,
        ArtType::CanvasPrint,
    ];

    // Unknown or absent identifiers fall back to a painting.
    pub fn from_id(id: Option<&str>) -> Self {
        match id {
            Some("photograph") => ArtType::Photograph,
            Some("sculpture") => ArtType::Sculpture,
            Some("gallery_wall") => ArtType::GalleryWall,
            Some("abstract_art") => ArtType::AbstractArt,
            Some("canvas_print") => ArtType::CanvasPrint,
            _ => ArtType::Painting,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ArtType::Painting => "painting",
            ArtType::Photograph => "photograph",
            ArtType::Sculpture => "sculpture",
            ArtType::GalleryWall => "gallery_wall",
            ArtType::AbstractArt => "abstract_art",
            ArtType::CanvasPrint => "canvas_print",
        }
    }

    // Description fragment spliced into the prompts as the object to add.
    pub fn describe(self) -> &'static str {
        match self {
            ArtType::Painting => {
                "a beautiful, high-quality framed painting with an elegant ornate gold frame. The painting should be a tasteful landscape or abstract artwork with rich colors that complement the room"
            }
            ArtType::Photograph => {
                "a professionally framed photograph with a modern, sleek black frame. The photograph should be a striking artistic photo (landscape, cityscape, or artistic portrait) that fits the room's aesthetic"
            }
            ArtType::Sculpture => {
                "an elegant three-dimensional wall-mounted sculpture with interesting textures and shadows. The sculpture should be modern and artistic, creating visual interest on the wall"
            }
            ArtType::GalleryWall => {
                "a professionally curated gallery wall featuring 5-7 framed artworks of various sizes arranged in an aesthetically pleasing pattern. The frames should be a mix of styles and the artwork should be cohesive"
            }
            ArtType::AbstractArt => {
                "a large, vibrant abstract art piece with bold colors, dynamic brushstrokes, and geometric or organic shapes that create visual energy. The piece should be properly framed or on canvas"
            }
            ArtType::CanvasPrint => {
                "a large stretched canvas print featuring contemporary artwork with modern styling. The canvas should be frameless with gallery-wrapped edges, showing a striking image that complements the space"
            }
        }
    }
}

// Lookup straight from the wire identifier.
pub fn describe(id: Option<&str>) -> &'static str {
    ArtType::from_id(id).describe()
}
