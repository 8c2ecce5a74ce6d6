//! Names of the environment variables that are copied out of the game
//! process. Everything else in its environment is dropped.

pub const TERM: &str = "TERM";
pub const SHELL: &str = "SHELL";
pub const PATH: &str = "PATH";
/// Path of the wine binary. Also appears bare (without `=`) in some
/// launchers' environment blocks.
pub const WINE: &str = "WINE";
pub const WINEPREFIX: &str = "WINEPREFIX";
pub const STEAM_USER: &str = "SteamUser";

pub const WHITELIST: &[&str] = &[
    "DRI_PRIME",
    "LD_LIBRARY_PATH",
    "PYTHONPATH",
    TERM,
    PATH,
    WINE,
    SHELL,
    // Steam launch
    STEAM_USER,
    "SteamGameId",
    "SteamAppId",
    "SteamClientLaunch",
    "SteamAppUser",
    "EnableConfiguratorSupport",
    "ENABLE_VK_LAYER_VALVE_steam_overlay_1",
    "DXVK",
    "DXVK_LOG_LEVEL",
    "STEAM_ZENITY",
    "STEAM_RUNTIME",
    "STEAM_RUNTIME_LIBRARY_PATH",
    "STEAM_CLIENT_CONFIG_FILE",
    "STEAM_COMPAT_CLIENT_INSTALL_PATH",
    "STEAM_COMPAT_DATA_PATH",
    "STEAMSCRIPT_VERSION",
    // SDL
    "SDL_VIDEO_X11_DGAMOUSE",
    "SDL_GAMECONTROLLERCONFIG",
    "SDL_GAMECONTROLLER_IGNORE_DEVICES",
    "SDL_GAMECONTROLLER_ALLOW_STEAM_VIRTUAL_GAMEPAD",
    "SDL_VIDEO_FULLSCREEN_DISPLAY",
    // Steam streaming
    "SteamStreamingHardwareEncodingNVIDIA",
    "SteamStreamingHardwareEncodingIntel",
    "SteamStreamingHardwareEncodingAMD",
    // Wine / Proton
    "WINEDEBUG",
    "WINEDLLPATH",
    WINEPREFIX,
    "WINE_MONO_OVERRIDES",
    "WINEESYNC",
    "WINEDLLOVERRIDES",
    "WINELOADERNOEXEC",
    "WINEPRELOADRESERVE",
    "PROTON_VR_RUNTIME",
];

/// Check whether a variable name may be copied into the reconstructed
/// environment. Names are case sensitive.
pub fn is_whitelisted(name: &str) -> bool {
    WHITELIST.contains(&name)
}
