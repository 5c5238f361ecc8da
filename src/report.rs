use hexsticker::HexstickerError;

/// Print `err` for the user, with a hint where one helps.
pub fn report_error(err: &HexstickerError) {
    eprintln!("Error: {err}");
    if let HexstickerError::UnknownFileType(_) = err {
        eprintln!();
        eprintln!("The file type is taken from the output file extension.");
        eprintln!("Use --output <path> to pick a supported one.");
    }
}
