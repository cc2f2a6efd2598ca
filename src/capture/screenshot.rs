//! Desktop region capture using GDI.

use anyhow::{anyhow, Result};

use super::{Capturer, Frame, Region};

/// Captures regions of the live desktop.
#[derive(Debug, Default)]
pub struct ScreenCapturer;

impl ScreenCapturer {
    pub fn new() -> Self {
        Self
    }
}

impl Capturer for ScreenCapturer {
    fn capture(&mut self, region: &Region) -> Result<Frame> {
        if region.width == 0 || region.height == 0 {
            return Err(anyhow!("Region {} is empty", region));
        }
        capture_screen_region(region)
    }
}

/// Copies `region` of the virtual desktop into an RGBA image.
///
/// This function:
/// 1. Checks the region lies within the virtual desktop
/// 2. Blits the screen into a compatible memory bitmap
/// 3. Reads the bitmap back as top-down 32-bit BGRA
/// 4. Converts from BGRA to RGBA format
#[cfg(windows)]
fn capture_screen_region(region: &Region) -> Result<Frame> {
    use image::Rgba;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Gdi::{
        BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, DeleteDC, DeleteObject, GetDC,
        GetDIBits, ReleaseDC, SelectObject, BITMAPINFO, BITMAPINFOHEADER, BI_RGB, CAPTUREBLT,
        DIB_RGB_COLORS, HGDIOBJ, SRCCOPY,
    };
    use windows::Win32::UI::WindowsAndMessaging::{
        GetSystemMetrics, SM_CXVIRTUALSCREEN, SM_CYVIRTUALSCREEN, SM_XVIRTUALSCREEN,
        SM_YVIRTUALSCREEN,
    };

    let (left, top, width, height) = unsafe {
        (
            GetSystemMetrics(SM_XVIRTUALSCREEN),
            GetSystemMetrics(SM_YVIRTUALSCREEN),
            GetSystemMetrics(SM_CXVIRTUALSCREEN),
            GetSystemMetrics(SM_CYVIRTUALSCREEN),
        )
    };
    let right = left as i64 + width as i64;
    let bottom = top as i64 + height as i64;
    if (region.x as i64) < left as i64
        || (region.y as i64) < top as i64
        || region.x as i64 + region.width as i64 > right
        || region.y as i64 + region.height as i64 > bottom
    {
        return Err(anyhow!(
            "Region {} is outside the visible desktop ({}x{} at {}, {})",
            region,
            width,
            height,
            left,
            top
        ));
    }

    let w = region.width as i32;
    let h = region.height as i32;
    let mut bgra: Vec<u8> = vec![0; (region.width * region.height * 4) as usize];

    unsafe {
        let screen_dc = GetDC(HWND::default());
        if screen_dc.is_invalid() {
            return Err(anyhow!("GetDC failed"));
        }
        let mem_dc = CreateCompatibleDC(screen_dc);
        let bitmap = CreateCompatibleBitmap(screen_dc, w, h);
        let previous = SelectObject(mem_dc, HGDIOBJ(bitmap.0));

        let blit = BitBlt(
            mem_dc,
            0,
            0,
            w,
            h,
            screen_dc,
            region.x as i32,
            region.y as i32,
            SRCCOPY | CAPTUREBLT,
        );

        // Negative height requests a top-down bitmap
        let mut info = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: w,
                biHeight: -h,
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let lines = if blit.is_ok() {
            GetDIBits(
                mem_dc,
                bitmap,
                0,
                h as u32,
                Some(bgra.as_mut_ptr() as *mut std::ffi::c_void),
                &mut info,
                DIB_RGB_COLORS,
            )
        } else {
            0
        };

        SelectObject(mem_dc, previous);
        let _ = DeleteObject(HGDIOBJ(bitmap.0));
        let _ = DeleteDC(mem_dc);
        ReleaseDC(HWND::default(), screen_dc);

        blit.map_err(|e| anyhow!("BitBlt failed: {}", e))?;
        if lines != h {
            return Err(anyhow!("GetDIBits returned {} of {} lines", lines, h));
        }
    }

    let mut img = Frame::new(region.width, region.height);
    for (i, pixel) in img.pixels_mut().enumerate() {
        let offset = i * 4;
        // BGRA -> RGBA, GDI leaves alpha undefined
        *pixel = Rgba([bgra[offset + 2], bgra[offset + 1], bgra[offset], 255]);
    }

    Ok(img)
}

#[cfg(not(windows))]
fn capture_screen_region(region: &Region) -> Result<Frame> {
    Err(anyhow!(
        "Screen capture of {} is not supported on this platform",
        region
    ))
}
