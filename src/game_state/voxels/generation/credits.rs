//! # Credits
//!
//! The credits roster shown in the logo world: a fixed list of development roles
//! dealt round-robin to the three developers after a shuffle.

use crate::game_state::voxels::block::block_type::BlockType;

/// Developers in display order, each with the block type their bar is drawn with.
pub const DEVELOPERS: [(&str, BlockType); 3] = [
    ("Joe", BlockType::ORE),
    ("Manu", BlockType::CRYSTAL),
    ("Ev", BlockType::WINDOW),
];

pub const ROLES: [&str; 100] = [
    // Programming
    "Lead Programmer", "Senior Game Developer", "Gameplay Programmer", "Engine Programmer",
    "Tools Programmer", "AI Programmer", "Physics Programmer", "Network Programmer",
    "UI Programmer", "Audio Programmer", "Graphics Programmer", "System Architect",
    "Technical Director", "Lead Engineer", "Backend Developer", "Frontend Developer",
    "Full Stack Developer", "DevOps Engineer", "Platform Engineer", "Mobile Developer",
    "Console Programmer", "Performance Engineer", "Security Engineer", "Database Developer",
    "Shader Programmer", "VR Developer", "AR Developer", "Machine Learning Engineer",
    "Data Engineer", "Cloud Developer", "Infrastructure Engineer", "Build Engineer",
    "Automation Engineer",
    // Art & design
    "Art Director", "Lead Artist", "Concept Artist", "Character Artist", "3D Modeler",
    "Environment Artist", "Texture Artist", "Lighting Artist", "VFX Artist", "Technical Artist",
    "Animation Director", "Character Animator", "Environmental Animator", "UI/UX Designer",
    "Level Designer", "Game Designer", "Creative Director", "Visual Designer", "Icon Designer",
    "Logo Designer", "Storyboard Artist", "Cinematic Artist", "Particle Effects Artist",
    "Shader Artist", "Material Artist", "Rigging Artist", "Motion Graphics Artist",
    "Brand Designer", "Marketing Artist", "Promotional Artist", "User Experience Designer",
    "Interface Designer", "Accessibility Designer",
    // Production & other
    "Executive Producer", "Producer", "Associate Producer", "Project Manager", "Scrum Master",
    "Product Owner", "Development Manager", "Studio Head", "Creative Producer",
    "Technical Producer", "Audio Director", "Sound Designer", "Music Composer",
    "Voice Director", "Foley Artist", "Quality Assurance Lead", "Senior QA Tester",
    "QA Automation Engineer", "Localization Manager", "Translator", "Community Manager",
    "Marketing Director", "Brand Manager", "Public Relations Manager", "Content Creator",
    "Documentation Writer", "Technical Writer", "Legal Counsel", "Business Development",
    "Publisher Relations", "Platform Relations", "Esports Coordinator", "Analytics Specialist",
    "User Research Lead",
];

/// One developer's line in the credits.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditEntry {
    pub name: &'static str,
    pub roles: Vec<&'static str>,
    /// Block type the developer's bar is drawn with.
    pub color: BlockType,
}

/// Shuffles the roles and deals them round-robin to the developers.
pub fn generate_credits(rng: &mut fastrand::Rng) -> Vec<CreditEntry> {
    let mut roles = ROLES.to_vec();
    rng.shuffle(&mut roles);

    let mut credits: Vec<CreditEntry> = DEVELOPERS
        .iter()
        .map(|&(name, color)| CreditEntry {
            name,
            roles: Vec::new(),
            color,
        })
        .collect();

    for (index, role) in roles.into_iter().enumerate() {
        credits[index % DEVELOPERS.len()].roles.push(role);
    }

    credits
}
