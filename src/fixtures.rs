//! Minimal JPEG builders for tests
//!
//! Produces an SOI marker, an APP1 `Exif` segment holding a little-endian
//! TIFF structure (IFD0 plus an optional Exif sub-IFD) and an EOI marker.
//! That is all the EXIF reader needs; no image data is included.

/// EXIF pointer tag from IFD0 to the Exif sub-IFD
const TAG_EXIF_IFD_POINTER: u16 = 0x8769;

const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;

/// Field value written into a test IFD
#[derive(Debug, Clone, Copy)]
pub enum ExifValue<'a> {
    Ascii(&'a str),
    Long(u32),
}

/// JPEG bytes carrying the given IFD0 and Exif sub-IFD entries
pub fn jpeg_with_exif(ifd0: &[(u16, ExifValue)], exif_ifd: &[(u16, ExifValue)]) -> Vec<u8> {
    let tiff = tiff_bytes(ifd0, exif_ifd);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let segment_len = (2 + 6 + tiff.len()) as u16;
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// JPEG bytes with no APP1 segment at all
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}

fn ifd_len(entries: usize) -> usize {
    2 + 12 * entries + 4
}

fn tiff_bytes(ifd0: &[(u16, ExifValue)], exif_ifd: &[(u16, ExifValue)]) -> Vec<u8> {
    let mut ifd0: Vec<(u16, ExifValue)> = ifd0.to_vec();
    let exif_offset = 8 + ifd_len(ifd0.len() + usize::from(!exif_ifd.is_empty()));
    if !exif_ifd.is_empty() {
        ifd0.push((TAG_EXIF_IFD_POINTER, ExifValue::Long(exif_offset as u32)));
    }
    let exif_len = if exif_ifd.is_empty() {
        0
    } else {
        ifd_len(exif_ifd.len())
    };
    let data_offset = exif_offset + exif_len;

    let mut out = Vec::new();
    out.extend_from_slice(b"II*\0");
    out.extend_from_slice(&8u32.to_le_bytes());

    let mut data = Vec::new();
    write_ifd(&mut out, &mut data, data_offset, &ifd0);
    if !exif_ifd.is_empty() {
        write_ifd(&mut out, &mut data, data_offset, exif_ifd);
    }
    out.extend_from_slice(&data);
    out
}

fn write_ifd(out: &mut Vec<u8>, data: &mut Vec<u8>, data_offset: usize, entries: &[(u16, ExifValue)]) {
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for (tag, value) in entries {
        out.extend_from_slice(&tag.to_le_bytes());
        match value {
            ExifValue::Long(v) => {
                out.extend_from_slice(&TYPE_LONG.to_le_bytes());
                out.extend_from_slice(&1u32.to_le_bytes());
                out.extend_from_slice(&v.to_le_bytes());
            }
            ExifValue::Ascii(text) => {
                let mut bytes = text.as_bytes().to_vec();
                bytes.push(0);
                out.extend_from_slice(&TYPE_ASCII.to_le_bytes());
                out.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
                if bytes.len() <= 4 {
                    bytes.resize(4, 0);
                    out.extend_from_slice(&bytes);
                } else {
                    out.extend_from_slice(&((data_offset + data.len()) as u32).to_le_bytes());
                    data.extend_from_slice(&bytes);
                    if data.len() % 2 == 1 {
                        data.push(0);
                    }
                }
            }
        }
    }
    // No next IFD
    out.extend_from_slice(&0u32.to_le_bytes());
}
