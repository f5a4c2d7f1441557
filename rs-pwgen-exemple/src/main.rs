use std::env;

use rs_pwgen_core::entropy::per_character_entropy;
use rs_pwgen_core::model::charset::{default_sets, CharacterSet};
use rs_pwgen_core::model::generator::Generator;
use rs_pwgen_core::model::profile::{load_profiles, Profile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    // Password flavour: 16 characters, at most 16 repetitions, default sets
    // (lowercase, uppercase, digits, symbols)
    let passwords = Generator::password();
    log::info!(
        "password alphabet: {} characters, {:.1} bits for {} characters",
        passwords.alphabet_size(),
        passwords.theoretical_entropy(),
        passwords.length()
    );
    for i in 0..5 {
        let password = passwords.generate();
        let entropy = per_character_entropy(&password);
        println!("Password {}: {} ({:.3} bits/char)", i + 1, password, entropy);
    }

    // Token flavour: same sets, no repetition cap
    let tokens = Generator::token();
    println!("Token: {}", tokens.generate());

    // Custom sets: the range constructor refuses empty or inverted ranges
    match CharacterSet::from_range(97, 97) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected range: {e}"),
    }
    let hex = CharacterSet::from_chars("0123456789abcdef".chars());
    let mut custom = Generator::new(32, 0, vec![hex.clone()])?;
    println!("Hex token: {}", custom.generate());

    // 16 characters cannot fill 32 slots with at most one repetition each
    match custom.configure(32, 1, Some(vec![hex.clone()])) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected configuration: {e}"),
    }
    custom.configure(32, 2, Some(vec![hex]))?;
    println!("Hex token (max 2 repetitions): {}", custom.generate());

    // Many strings at once, spread over every CPU
    let batch = Generator::new(24, 2, default_sets())?.generate_batch(10_000);
    println!("Generated {} passwords of 24 characters", batch.len());

    // Profiles stored in a folder, one generator per profile
    let folder = env::temp_dir().join("rs-pwgen-profiles");
    Profile::token().save(folder.join("token.profile"))?;
    Profile::password().save(folder.join("password.profile"))?;
    for (name, profile) in load_profiles(&folder)? {
        let generator = Generator::from_profile(profile)?;
        println!("Profile '{}': {}", name, generator.generate());
    }

    Ok(())
}
