pub mod strings {
    automod::dir!(pub "src/strings");
}
