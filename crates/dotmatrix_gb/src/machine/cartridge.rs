/// Size of the fixed, unbanked ROM window (0x0000..0x7FFF).
pub const ROM_SIZE: usize = 0x8000;

const TITLE_START: usize = 0x0134;
const TITLE_END: usize = 0x0144;
const CARTRIDGE_TYPE: usize = 0x0147;

/// A ROM image normalised to exactly 32 KiB.
///
/// Shorter images are zero-padded and longer ones truncated; there is no
/// mapper, so bytes past 0x7FFF are never addressable.
#[derive(Clone)]
pub struct Cartridge {
    rom: Box<[u8; ROM_SIZE]>,
}

impl Cartridge {
    pub fn new(rom: &[u8]) -> Self {
        let mut image = Box::new([0u8; ROM_SIZE]);
        let len = rom.len().min(ROM_SIZE);
        image[..len].copy_from_slice(&rom[..len]);

        let cart = Self { rom: image };

        if rom.len() > ROM_SIZE {
            log::warn!(
                "GB cartridge: ROM is {} bytes, only the first 0x{:04X} are mapped",
                rom.len(),
                ROM_SIZE
            );
        }
        if cart.cartridge_type() != 0x00 {
            log::warn!(
                "GB cartridge: type 0x{:02X} needs a mapper; running as ROM only",
                cart.cartridge_type()
            );
        }
        log::info!(
            "GB cartridge: title={:?} type=0x{:02X} size={}",
            cart.title(),
            cart.cartridge_type(),
            rom.len()
        );

        cart
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.rom[addr as usize & (ROM_SIZE - 1)]
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom[..]
    }

    /// Header title (0x0134..0x0143), trimmed at the first NUL.
    pub fn title(&self) -> String {
        let raw = &self.rom[TITLE_START..TITLE_END];
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        String::from_utf8_lossy(&raw[..end]).trim().to_string()
    }

    /// Header cartridge type byte (0x0147).
    pub fn cartridge_type(&self) -> u8 {
        self.rom[CARTRIDGE_TYPE]
    }
}

impl std::fmt::Debug for Cartridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cartridge")
            .field("title", &self.title())
            .field("cartridge_type", &self.cartridge_type())
            .finish()
    }
}
