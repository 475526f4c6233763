use std::path::Path;

use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{Filter, Pdf, Ref};

/// Decoded raster ready to be written as an image XObject
pub(crate) struct RasterImage {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
    alpha: Option<Vec<u8>>,
}

impl RasterImage {
    pub(crate) fn open(path: &Path) -> Result<Self, image::ImageError> {
        let rgba = image::open(path)?.to_rgba8();
        let (width, height) = rgba.dimensions();

        let rgb = rgba
            .pixels()
            .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
            .collect();
        let alpha = rgba
            .pixels()
            .any(|p| p.0[3] < u8::MAX)
            .then(|| rgba.pixels().map(|p| p.0[3]).collect());

        Ok(Self {
            width,
            height,
            rgb,
            alpha,
        })
    }

    /// Width over height
    pub(crate) fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    pub(crate) fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Write the image, plus its soft mask when `mask` is given and the image
    /// has transparency
    pub(crate) fn write(&self, pdf: &mut Pdf, id: Ref, mask: Option<Ref>) {
        let mask = match (&self.alpha, mask) {
            (Some(alpha), Some(mask_id)) => {
                let compressed = compress_to_vec_zlib(alpha, 6);
                let mut xobj = pdf.image_xobject(mask_id, &compressed);
                xobj.filter(Filter::FlateDecode);
                xobj.width(self.width as i32);
                xobj.height(self.height as i32);
                xobj.color_space().device_gray();
                xobj.bits_per_component(8);
                Some(mask_id)
            }
            _ => None,
        };

        let compressed = compress_to_vec_zlib(&self.rgb, 6);
        let mut xobj = pdf.image_xobject(id, &compressed);
        xobj.filter(Filter::FlateDecode);
        xobj.width(self.width as i32);
        xobj.height(self.height as i32);
        xobj.color_space().device_rgb();
        xobj.bits_per_component(8);
        if let Some(mask_id) = mask {
            xobj.s_mask(mask_id);
        }
    }
}
