use url_location::{is_absolute, make_absolute, Location};

fn main() {
    let mut location = Location::new("https://example.com/docs/guide?lang=en#install");

    println!("Starting at: {}", location);
    println!("  protocol: {}", location.protocol());
    println!("  host:     {}", location.host());
    println!("  pathname: {}", location.path_name());
    println!("  search:   {}", location.search());
    println!("  hash:     {}", location.hash());

    location.set_hash("usage");
    location.set_port("8443");
    println!("\nAfter editing hash and port: {}", location);

    let next = make_absolute(&location.href(), "../api/index.html");
    println!("\nResolved '../api/index.html' to: {}", next);
    location.assign(&next);
    println!("Now at: {}", location);

    for candidate in ["https://example.com/x", "/x", "mailto:someone@example.com", ""] {
        println!(
            "{:<30} {}",
            format!("'{}'", candidate),
            if is_absolute(candidate) { "absolute" } else { "relative" }
        );
    }
}
