//! Mode bits to `ls -l` style permission strings.

/// Mask selecting the file type nibble (bits 12-15).
pub const S_IFMT: u16 = 0o170_000;
pub const S_IFDIR: u16 = 0o040_000;
pub const S_IFREG: u16 = 0o100_000;
pub const S_IFLNK: u16 = 0o120_000;

pub const S_ISUID: u16 = 0o4000;
pub const S_ISGID: u16 = 0o2000;
pub const S_ISVTX: u16 = 0o1000;

/// Type character indexed by the file type nibble.
const FILE_TYPES: [char; 16] = [
    '.', 'p', 'c', '?', 'd', '?', 'b', '?', '-', '?', 'l', '?', 's', '?', '?', '?',
];

/// Permission string indexed by a 3-bit rwx group.
const PERMISSIONS: [&str; 8] = ["---", "--x", "-w-", "-wx", "r--", "r-x", "rw-", "rwx"];

#[must_use]
pub fn type_char(mode: u16) -> char {
    FILE_TYPES[usize::from((mode & S_IFMT) >> 12)]
}

/// Owner, group and other triplets with the special bits overlaid.
#[must_use]
pub fn permission_triplets(mode: u16) -> [String; 3] {
    let mut triplets = [
        PERMISSIONS[usize::from((mode >> 6) & 0o7)].to_string(),
        PERMISSIONS[usize::from((mode >> 3) & 0o7)].to_string(),
        PERMISSIONS[usize::from(mode & 0o7)].to_string(),
    ];

    if mode & S_ISVTX != 0 {
        overlay(&mut triplets[2], 't');
    }
    if mode & S_ISUID != 0 {
        overlay(&mut triplets[0], 's');
    }
    if mode & S_ISGID != 0 {
        overlay(&mut triplets[1], 's');
    }

    triplets
}

/// Replace the execute slot with `lower` when execute is set, else its uppercase form.
fn overlay(triplet: &mut String, lower: char) {
    let marker = if triplet.ends_with('x') {
        lower
    } else {
        lower.to_ascii_uppercase()
    };
    triplet.pop();
    triplet.push(marker);
}

/// Format raw mode bits as a fixed 10 character string, e.g. `drwxr-xr-x`.
#[must_use]
pub fn format_mode(mode: u16) -> String {
    let [owner, group, other] = permission_triplets(mode);
    let mut out = String::with_capacity(10);
    out.push(type_char(mode));
    out.push_str(&owner);
    out.push_str(&group);
    out.push_str(&other);
    out
}
