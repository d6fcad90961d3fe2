use std::fs;
use std::path::Path;

use oracle_core::DEFAULT_IMAGE_URL;

/// Sample corpus files: name and contents.
const SAMPLES: &[(&str, &str)] = &[
    (
        "bible.txt",
        "The Lord is my shepherd; I shall not want. (Psalm 23:1)\n\
         To every thing there is a season, and a time to every purpose under the heaven. (Ecclesiastes 3:1)\n\
         Be still, and know that I am God. (Psalm 46:10)\n",
    ),
    (
        "sutra.txt",
        "All that we are is the result of what we have thought. (Dhammapada 1)\n\
         Form is emptiness, emptiness is form. (Heart Sutra)\n",
    ),
    (
        "literature.txt",
        "It was the best of times, it was the worst of times. (Charles Dickens, A Tale of Two Cities)\n\
         Whatever our souls are made of, his and mine are the same. (Emily Bronte, Wuthering Heights)\n",
    ),
    (
        "talmud.txt",
        "If I am not for myself, who will be for me? (Pirkei Avot 1:14)\n\
         Who is wise? One who learns from every person. (Pirkei Avot 4:1)\n",
    ),
    (
        "lyrics.txt",
        "Amazing grace, how sweet the sound (John Newton, Amazing Grace)\n",
    ),
    (
        "poetry.txt",
        "Hope is the thing with feathers that perches in the soul (Emily Dickinson)\n\
         Two roads diverged in a wood, and I took the one less traveled by (Robert Frost, The Road Not Taken)\n\
         Do not go gentle into that good night\n",
    ),
];

pub fn run(name: &str) -> Result<(), String> {
    let dir = Path::new(name);

    if dir.exists() {
        return Err(format!("directory '{}' already exists", name));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;

    for (file, content) in SAMPLES {
        fs::write(dir.join(file), content).map_err(|e| format!("cannot write {file}: {e}"))?;
    }

    let images = format!("{DEFAULT_IMAGE_URL} morning light\n");
    fs::write(dir.join("images.txt"), images)
        .map_err(|e| format!("cannot write images.txt: {e}"))?;

    println!("Created oracle data in {}/", name);
    for (file, _) in SAMPLES {
        println!("  {file}");
    }
    println!("  images.txt");
    println!();
    println!("Get started:");
    println!("  cd {}", name);
    println!("  # Add one quotation per line; end a line with (Source) to label it");
    println!("  oracle corpus            # See what was loaded");
    println!("  oracle ask \"<question>\"  # Consult the oracle");

    Ok(())
}
