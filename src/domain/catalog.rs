use serde::{Deserialize, Serialize};

/// A fixed-price bundle of photography services. At most one per booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32, // whole dollars
    pub includes: Vec<String>,
}

/// An optional priced extra attached to a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub includes: Vec<String>,
}

/// The studio's service catalog. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    packages: Vec<Package>,
    add_ons: Vec<AddOn>,
}

impl Catalog {
    pub fn standard() -> Self {
        let packages = vec![
            Package {
                id: "listing".to_string(),
                name: "Standard Listing Package".to_string(),
                description: "For real estate agents who only need photos for MLS listing".to_string(),
                price: 250,
                includes: vec![
                    "25-50 HDR photos (interior & exterior)".to_string(),
                    "Drone photos".to_string(),
                    "24-48 hour turnaround".to_string(),
                ],
            },
            Package {
                id: "land".to_string(),
                name: "Land Photography Session".to_string(),
                description: "1 hour session with 30 edited photos".to_string(),
                price: 180,
                includes: vec![
                    "5-10 drone photos covering the entire piece of land".to_string(),
                    "Multiple angles and altitudes".to_string(),
                    "Property lines drawn upon request".to_string(),
                    "24-48 hour turnaround".to_string(),
                ],
            },
            Package {
                id: "luxury".to_string(),
                name: "Luxury Media Package".to_string(),
                description: "3 hour event coverage".to_string(),
                price: 800,
                includes: vec![
                    "Photos of entire property".to_string(),
                    "4k walkthrough video".to_string(),
                    "Drone photos".to_string(),
                ],
            },
        ];

        let add_ons = vec![
            AddOn {
                id: "twilight".to_string(),
                name: "Twilight Hour".to_string(),
                price: 150,
                includes: vec![
                    "5 photos captured at dusk/sunset".to_string(),
                    "24-48 hour turnaround".to_string(),
                ],
            },
            AddOn {
                id: "detail".to_string(),
                name: "Detail Photo Package".to_string(),
                price: 400,
                includes: vec![
                    "10-20 additional photos focusing on property details".to_string(),
                    "Focus on interior/exterior design features, fixtures, and amenities".to_string(),
                    "Best for staged houses".to_string(),
                ],
            },
            AddOn {
                id: "socials".to_string(),
                name: "Social Media Walkthrough Video".to_string(),
                price: 500,
                includes: vec![
                    "4k cinematic walkthrough".to_string(),
                    "Drone shots".to_string(),
                    "Optional agent intro".to_string(),
                ],
            },
        ];

        Self { packages, add_ons }
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    pub fn package(&self, id: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }
}
